use std::collections::HashMap;

use crate::models::Recommendation;

/// The seven addressable input fields of the recommendation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    OriginalProductId,
    ProductId,
    ProductName,
    Activated,
    Reason,
}

impl Field {
    /// All fields, in form order
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::OriginalProductId,
        Field::ProductId,
        Field::ProductName,
        Field::Activated,
        Field::Reason,
    ];

    /// Stable identifier the form surface addresses the field by
    pub fn id(&self) -> &'static str {
        match self {
            Field::Id => "recommendation_id",
            Field::Name => "recommendation_name",
            Field::OriginalProductId => "recommendation_original_product_id",
            Field::ProductId => "recommendation_product_id",
            Field::ProductName => "recommendation_product_name",
            Field::Activated => "recommendation_activated",
            Field::Reason => "recommendation_reason",
        }
    }

    /// Resolves a stable identifier back to its field
    pub fn from_id(id: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.id() == id)
    }
}

/// The set of input fields and display areas the user interacts with
///
/// Abstracts the concrete surface (a document, a console, a test fixture) so
/// the controller can read and write fields without knowing how they are
/// displayed. All values cross this boundary as strings.
pub trait FormSurface {
    /// Current value of a field; empty string when unset
    fn get(&self, field: Field) -> String;

    /// Overwrites a field value
    fn set(&mut self, field: Field, value: &str);

    /// Replaces the flash message area with `message`
    fn flash(&mut self, message: &str);

    /// Empties the flash message area
    fn clear_flash(&mut self);

    /// Replaces the search results container with rendered markup
    fn set_search_results(&mut self, markup: &str);
}

/// In-memory form surface backing tests and the console driver
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: HashMap<Field, String>,
    flash: String,
    search_results: String,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash_text(&self) -> &str {
        &self.flash
    }

    pub fn search_results(&self) -> &str {
        &self.search_results
    }
}

impl FormSurface for MemoryForm {
    fn get(&self, field: Field) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set(&mut self, field: Field, value: &str) {
        self.fields.insert(field, value.to_string());
    }

    fn flash(&mut self, message: &str) {
        self.flash = message.to_string();
    }

    fn clear_flash(&mut self) {
        self.flash.clear();
    }

    fn set_search_results(&mut self, markup: &str) {
        self.search_results = markup.to_string();
    }
}

/// Flat snapshot of the seven form fields
///
/// `activated` is coerced to a strict boolean on read; everything else stays
/// the raw string the surface held, including `id`, which is never parsed or
/// validated client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct FormData {
    pub id: String,
    pub name: String,
    pub original_product_id: String,
    pub recommendation_product_id: String,
    pub recommendation_product_name: String,
    pub reason: String,
    pub activated: bool,
}

/// Writes a recommendation record into the form fields
///
/// The boolean flag is written as the literal string `"true"` only when the
/// source value is strictly true, otherwise `"false"`. A missing `id` writes
/// the empty string.
pub fn write_form_data(surface: &mut dyn FormSurface, rec: &Recommendation) {
    let id = rec.id.map(|i| i.to_string()).unwrap_or_default();
    surface.set(Field::Id, &id);
    surface.set(Field::Name, &rec.name);
    surface.set(Field::OriginalProductId, &rec.original_product_id);
    surface.set(Field::ProductId, &rec.recommendation_product_id);
    surface.set(Field::ProductName, &rec.recommendation_product_name);
    if rec.activated {
        surface.set(Field::Activated, "true");
    } else {
        surface.set(Field::Activated, "false");
    }
    surface.set(Field::Reason, &rec.reason);
}

/// Sets every form field to the empty string
///
/// Unconditional and idempotent.
pub fn clear_form_data(surface: &mut dyn FormSurface) {
    for field in Field::ALL {
        surface.set(field, "");
    }
}

/// Reads all seven fields back out of the form
pub fn read_form_data(surface: &dyn FormSurface) -> FormData {
    FormData {
        id: surface.get(Field::Id),
        name: surface.get(Field::Name),
        original_product_id: surface.get(Field::OriginalProductId),
        recommendation_product_id: surface.get(Field::ProductId),
        recommendation_product_name: surface.get(Field::ProductName),
        reason: surface.get(Field::Reason),
        activated: surface.get(Field::Activated) == "true",
    }
}
