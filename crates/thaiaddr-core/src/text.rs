// crates/thaiaddr-core/src/text.rs
//! Text helpers shared by the index builder and the search engine.
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use std::cmp::Ordering;
use tracing::warn;

/// Thai collation backed by the CLDR `th` tailoring.
///
/// Leading vowels (เ แ โ ใ ไ) sort under the consonant that follows them
/// and tone marks only break ties. If the collation data cannot be loaded
/// the comparison degrades to code-point order.
pub struct ThaiCollator {
    inner: Option<CollatorBorrowed<'static>>,
}

impl ThaiCollator {
    pub fn new() -> Self {
        let inner = match Collator::try_new(locale!("th").into(), CollatorOptions::default()) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(error = %e, "thai collation unavailable; using code-point order");
                None
            }
        };
        Self { inner }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.inner {
            Some(c) => c.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for ThaiCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two strings under Thai collation.
///
/// Sorting many names should reuse one [`ThaiCollator`] instead.
///
/// # Examples
/// ```rust
/// use thaiaddr_core::text::thai_cmp;
/// use std::cmp::Ordering;
///
/// // "เกาะคา" sorts by its consonant ก, so it comes before "งาว".
/// assert_eq!(thai_cmp("เกาะคา", "งาว"), Ordering::Less);
/// ```
pub fn thai_cmp(a: &str, b: &str) -> Ordering {
    ThaiCollator::new().compare(a, b)
}

/// Lowercases ASCII letters only; everything else is kept verbatim.
///
/// English names are matched with this folding. Thai script has no case,
/// and wider Unicode folding is deliberately not applied.
#[inline]
pub fn fold_en(s: &str) -> String {
    s.to_ascii_lowercase()
}
