use console::Emoji;
use meapi_domain::Category;

pub static CHECK: Emoji<'_, '_> = Emoji("✅", "v");
pub static CROSS: Emoji<'_, '_> = Emoji("❌", "x");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "i");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️ ", "!");
pub static EMPTY: Emoji<'_, '_> = Emoji("📭", "-");
pub static GRAD: Emoji<'_, '_> = Emoji("🎓", "*");
pub static MAIL: Emoji<'_, '_> = Emoji("✉️ ", "@");
pub static DOT: Emoji<'_, '_> = Emoji("•", "-");
pub static CLOSE: Emoji<'_, '_> = Emoji("✕", "x");

pub fn category_icon(category: Category) -> Emoji<'static, 'static> {
    match category {
        Category::Success => CHECK,
        Category::Error => CROSS,
        Category::Info => INFO,
        Category::Warning => WARN,
    }
}
