//! Search/filter engine shared by every listing.
//!
//! A listing narrows its records with a free-text query and an optional
//! categorical filter. The query is matched case-insensitively as a substring
//! of the record's search fields joined by single spaces; the category must
//! match exactly. Both conditions must hold and the input order is kept.

use std::borrow::Cow;

/// Reads one field of a record as text.
pub type FieldAccessor<T> = for<'a> fn(&'a T) -> Cow<'a, str>;

/// Field selection for one entity kind: the fields searched by the text query
/// and the field compared against the categorical filter.
pub struct SearchFields<T> {
    text: Vec<FieldAccessor<T>>,
    category: FieldAccessor<T>,
}

impl<T> SearchFields<T> {
    #[must_use]
    pub fn new(text: Vec<FieldAccessor<T>>, category: FieldAccessor<T>) -> Self {
        Self { text, category }
    }

    fn haystack(&self, item: &T) -> String {
        let mut haystack = String::new();
        for (index, field) in self.text.iter().enumerate() {
            if index > 0 {
                haystack.push(' ');
            }
            haystack.push_str(&field(item));
        }
        haystack.to_lowercase()
    }

    fn category_of<'a>(&self, item: &'a T) -> Cow<'a, str> {
        (self.category)(item)
    }
}

/// Entity kinds that know their own search field set.
pub trait Searchable: Sized {
    /// Fields searched by the text query plus the categorical field.
    fn search_fields() -> SearchFields<Self>;
}

/// Returns the items matching `query` and `category`, in input order.
///
/// An empty (or whitespace-only) query matches everything, as does a `None`
/// or empty category.
#[must_use]
pub fn filter<'a, T>(
    items: &'a [T],
    query: &str,
    category: Option<&str>,
    fields: &SearchFields<T>,
) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    let category = category.filter(|wanted| !wanted.is_empty());

    items
        .iter()
        .filter(|item| needle.is_empty() || fields.haystack(item).contains(&needle))
        .filter(|item| category.is_none_or(|wanted| fields.category_of(item) == wanted))
        .collect()
}

/// [`filter`] using the kind's own field set.
#[must_use]
pub fn search<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a T> {
    filter(items, query, category, &T::search_fields())
}
