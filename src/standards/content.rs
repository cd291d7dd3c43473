//! Text of the NormalDance coding-standards guide.
//!
//! Everything here is static data; [`StandardsBuilder`] turns it into
//! paragraphs.
//!
//! [`StandardsBuilder`]: super::builder::StandardsBuilder

/// Default output file name.
pub const OUTPUT_FILE: &str = "NORMALDANCE_Coding_Standards_v1.0.docx";

/// Style id of the title paragraph.
pub const TITLE_STYLE: &str = "CustomTitle";
/// Style id of section headings.
pub const HEADING1_STYLE: &str = "CustomHeading1";
/// Style id of the version and date lines.
pub const HEADING2_STYLE: &str = "CustomHeading2";

/// A named paragraph style: display name, size in points, bold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpec {
    pub name: &'static str,
    pub size_pt: f64,
    pub bold: bool,
}

/// Styles registered before any paragraph is written, in registration order.
pub const STYLES: [StyleSpec; 3] = [
    StyleSpec {
        name: TITLE_STYLE,
        size_pt: 18.0,
        bold: true,
    },
    StyleSpec {
        name: HEADING1_STYLE,
        size_pt: 16.0,
        bold: true,
    },
    StyleSpec {
        name: HEADING2_STYLE,
        size_pt: 14.0,
        bold: true,
    },
];

/// Title paragraph; the line feed becomes a line break inside the paragraph.
pub const TITLE: &str = "Стандарты кодирования\nNormalDance";
pub const VERSION: &str = "Версия 1.0";
pub const DATE: &str = "Дата: Декабрь 2025";

/// Body of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody {
    /// One paragraph; line feeds become line breaks.
    Text(&'static str),
    /// One paragraph per item.
    Bullets(&'static [&'static str]),
}

/// A numbered section: heading paragraph followed by its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub number: u8,
    pub heading: &'static str,
    pub body: SectionBody,
}

impl Section {
    /// Paragraphs this section adds to the document, heading included.
    pub fn paragraph_count(&self) -> usize {
        1 + match self.body {
            SectionBody::Text(_) => 1,
            SectionBody::Bullets(items) => items.len(),
        }
    }
}

const INTRO: &str = "\
Данный документ содержит стандарты кодирования для команды разработки NormalDance.
Цель документа - обеспечение一致ности кода, ускорение code review и повышение качества программного обеспечения.

Стандарты внедряются поэтапно после согласования с вице-президентом по разработке.
Документ будет регулярно обновляться на основе обратной связи от команды.";

const PRINCIPLES: &[&str] = &[
    "• Читаемость кода превыше оптимизации производительности",
    "• DRY (Don't Repeat Yourself) - избегайте дублирования кода",
    "• KISS (Keep It Simple, Stupid) - простота превыше сложности",
    "• Явное лучше неявного (вдохновлено Python)",
    "• Код должен быть самодокументируемым",
    "• Безопасность и надежность превыше скорости разработки",
];

const STACK: &str = "\
3.1 Основные технологии:
• Frontend: React 18, Next.js 15, TypeScript 5
• Backend: Node.js, TypeScript
• Database: PostgreSQL (Neon), Prisma ORM
• Testing: Jest, React Testing Library, Playwright
• Styling: Tailwind CSS
• Deployment: Vercel, Docker

3.2 Конфигурации линтеров и форматтеров:
• ESLint: next/core-web-vitals конфигурация
• TypeScript: strict mode включен
• Prettier: автоматическое форматирование";

const STYLE_GUIDE: &str = "\
4.1 Именование:
• Переменные и функции: camelCase
• Компоненты и классы: PascalCase
• Константы: UPPER_SNAKE_CASE
• Файлы: kebab-case.tsx
• Папки: kebab-case

4.2 Импорты:
• React импорты отдельно от остальных
• Группировка: React, сторонние библиотеки, внутренние модули
• Абсолютные импорты через @/ для src/

4.3 Компоненты React:
• Функциональные компоненты с хуками
• Деструктуризация пропсов
• Ранний return для условного рендеринга";

const TESTING: &str = "\
5.1 Обязательные тесты:
• Unit тесты для утилит и хуков (Jest)
• Component тесты для UI компонентов (React Testing Library)
• Integration тесты для API endpoints
• E2E тесты для критических пользовательских сценариев (Playwright)

5.2 Требования к покрытию:
• Минимум 80% покрытие для новых компонентов
• 100% покрытие для бизнес-логики
• Критические пути: 100% покрытие

5.3 Соглашения по命名:
• Тестовые файлы: *.test.ts, *.test.tsx
• Describe блоки: описание компонента/функции
• It блоки: конкретное поведение";

const DOCUMENTATION: &str = "\
6.1 JSDoc комментарии:
• Обязательны для публичных API функций
• Сложные бизнес-логика функции
• Пропсы компонентов с неочевидным назначением

6.2 README файлы:
• Обязательны для новых модулей/пакетов
• Описание API, примеры использования
• Инструкции по настройке и запуску

6.3 Storybook:
• Обязателен для переиспользуемых UI компонентов
• Документация пропсов и вариантов использования";

const GIT_WORKFLOW: &str = "\
7.1 Branch naming:
• feature/description-kebab-case
• bugfix/issue-description
• hotfix/critical-fix
• refactor/component-improvement

7.2 Pull Request titles:
• [FEATURE] Добавление новой функциональности
• [BUGFIX] Исправление ошибки в компоненте
• [REFACTOR] Улучшение структуры кода
• [DOCS] Обновление документации

7.3 Commit messages:
type(scope): description

[optional body]

Types: feat, fix, docs, style, refactor, test, chore";

const CODE_REVIEW: &str = "\
8.1 Автоматизированные проверки:
• ESLint ошибки: blocking
• TypeScript ошибки: blocking
• Тесты: blocking при падении
• Prettier: auto-fix

8.2 Ручной review:
• Логика и алгоритмы
• Безопасность (SQL injection, XSS)
• Производительность
• Читабельность и поддерживаемость

8.3 Процесс:
• Максимум 2-3 ревьювера
• Обязательный approval от code owner
• Разрешение конфликтов через обсуждение";

const SECURITY: &str = "\
9.1 Валидация данных:
• Все пользовательские входные данные
• SQL параметры через Prisma
• API responses sanitization

9.2 Аутентификация и авторизация:
• JWT tokens с expiration
• Role-based access control
• Secure headers (helmet.js)

9.3 Мониторинг:
• Rate limiting на API endpoints
• Error logging и alerting
• Security audit logs";

const PERFORMANCE: &str = "\
10.1 Frontend:
• Bundle size < 500KB (gzip)
• First Contentful Paint < 2s
• Lighthouse score > 90

10.2 Backend:
• API response time < 500ms
• Database queries optimization
• Memory leaks prevention

10.3 Мониторинг:
• Web Vitals tracking
• Performance budgets
• Automated alerts";

/// The ten sections of the guide, in document order.
pub const SECTIONS: [Section; 10] = [
    Section {
        number: 1,
        heading: "1. Введение",
        body: SectionBody::Text(INTRO),
    },
    Section {
        number: 2,
        heading: "2. Общие принципы кодирования",
        body: SectionBody::Bullets(PRINCIPLES),
    },
    Section {
        number: 3,
        heading: "3. Технологический стек и конфигурации",
        body: SectionBody::Text(STACK),
    },
    Section {
        number: 4,
        heading: "4. Стилистические стандарты",
        body: SectionBody::Text(STYLE_GUIDE),
    },
    Section {
        number: 5,
        heading: "5. Тестирование",
        body: SectionBody::Text(TESTING),
    },
    Section {
        number: 6,
        heading: "6. Документация",
        body: SectionBody::Text(DOCUMENTATION),
    },
    Section {
        number: 7,
        heading: "7. Git Workflow",
        body: SectionBody::Text(GIT_WORKFLOW),
    },
    Section {
        number: 8,
        heading: "8. Code Review",
        body: SectionBody::Text(CODE_REVIEW),
    },
    Section {
        number: 9,
        heading: "9. Безопасность",
        body: SectionBody::Text(SECURITY),
    },
    Section {
        number: 10,
        heading: "10. Производительность",
        body: SectionBody::Text(PERFORMANCE),
    },
];
