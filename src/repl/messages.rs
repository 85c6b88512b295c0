//! User-facing message strings.
//!
//! Every string the loop prints lives here, in Ukrainian. Handlers and the
//! error renderer reference these constants so tests can assert against the
//! exact wording.

/// Prompt printed before each command is read.
pub const PROMPT: &str = "Введіть команду: ";

/// Reply to an unrecognized verb.
pub const UNKNOWN_COMMAND: &str = "Невідома команда. Будь ласка, спробуйте ще раз.";

/// Hint when `add` is missing its name/phone arguments.
pub const USAGE_ADD: &str = "Будь ласка, введіть ім'я та номер телефону.";

/// Hint when `edit` is missing its name/phone arguments.
pub const USAGE_EDIT: &str = "Будь ласка, введіть ім'я та новий номер телефону.";

/// Hint when `search` is missing its query.
pub const USAGE_SEARCH: &str = "Будь ласка, введіть пошуковий запит.";

/// Hint when `delete` or `birthday` is missing the contact name.
pub const USAGE_NAME: &str = "Будь ласка, введіть ім'я контакту.";

/// Header line of the `show-all` listing.
pub const ALL_CONTACTS_HEADER: &str = "Контакти:";

/// Reply to `show-all` on an empty book.
pub const EMPTY_BOOK: &str = "Адресна книга порожня.";

/// Header line of search results.
pub const SEARCH_HEADER: &str = "Результати пошуку:";

/// Reply to a search with no matches.
pub const NO_MATCHES: &str = "Не знайдено відповідних контактів.";

/// Question asked before overwriting an existing contact.
pub const CONFIRM_OVERWRITE: &str =
    "Контакт з таким ім'ям вже існує. Бажаєте оновити існуючий запис? (так/ні): ";

/// Reply when the user declines the overwrite.
pub const OVERWRITE_DECLINED: &str = "Дія відмінена. Немає змін у контактах.";

/// Reply when the confirmation answer is neither так nor ні.
pub const OVERWRITE_BAD_ANSWER: &str = "Невірна відповідь. Дія відмінена.";

/// Rendering of a contact-not-found failure.
pub const CONTACT_NOT_FOUND: &str = "Контакт не знайдений.";

/// Rendering of a phone-not-found failure.
pub const PHONE_NOT_FOUND: &str = "Невірний номер.";

/// Rendering of a malformed phone number.
pub const INVALID_PHONE: &str = "Помилка, номер повинен складатися з 10 цифр.";

/// Rendering of a malformed birthday.
pub const INVALID_BIRTHDAY: &str = "Недійсний формат дня народження. Спробуйте ДД-ММ-РРРР.";
