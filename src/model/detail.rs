//! Detail dialog state machine
//!
//! The dialog is either viewing a record read-only or editing a copy of its
//! fields. The record itself lives in the [`Catalog`] and is only written on
//! save, looked up by id.

use super::breed::{Breed, BreedEdit, Catalog, CatalogError, RecordId};

/// Editable fields in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Origin,
    Temperament,
    Description,
}

impl EditField {
    pub fn all() -> [EditField; 4] {
        [
            EditField::Name,
            EditField::Origin,
            EditField::Temperament,
            EditField::Description,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            EditField::Name => "Name",
            EditField::Origin => "Origin",
            EditField::Temperament => "Temperament",
            EditField::Description => "Description",
        }
    }

    fn next(&self) -> EditField {
        match self {
            EditField::Name => EditField::Origin,
            EditField::Origin => EditField::Temperament,
            EditField::Temperament => EditField::Description,
            EditField::Description => EditField::Name,
        }
    }

    fn prev(&self) -> EditField {
        match self {
            EditField::Name => EditField::Description,
            EditField::Origin => EditField::Name,
            EditField::Temperament => EditField::Origin,
            EditField::Description => EditField::Temperament,
        }
    }
}

/// Dialog mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMode {
    Viewing,
    Editing { fields: BreedEdit, focus: EditField },
}

/// State of an open detail dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    record: RecordId,
    /// Snapshot backing the read-only labels
    shown: Breed,
    mode: DetailMode,
}

impl DetailState {
    pub fn open(record: RecordId, breed: &Breed) -> Self {
        Self {
            record,
            shown: breed.clone(),
            mode: DetailMode::Viewing,
        }
    }

    pub fn record(&self) -> RecordId {
        self.record
    }

    pub fn shown(&self) -> &Breed {
        &self.shown
    }

    pub fn mode(&self) -> &DetailMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, DetailMode::Editing { .. })
    }

    /// Switch between viewing and editing
    ///
    /// Entering edit mode starts from the values currently shown. Leaving it
    /// without saving drops whatever was typed.
    pub fn toggle_edit(&mut self) {
        self.mode = match self.mode {
            DetailMode::Viewing => DetailMode::Editing {
                fields: BreedEdit {
                    name: self.shown.name.clone(),
                    origin: self.shown.origin.clone(),
                    temperament: self.shown.temperament.clone(),
                    description: self.shown.description.clone().unwrap_or_default(),
                },
                focus: EditField::Name,
            },
            DetailMode::Editing { .. } => DetailMode::Viewing,
        };
    }

    /// Write the edit fields into the catalog and return to viewing
    ///
    /// Does nothing while viewing. On error the dialog stays in edit mode.
    pub fn save(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        let DetailMode::Editing { fields, .. } = &self.mode else {
            return Ok(());
        };

        catalog.update(self.record, fields.clone())?;
        if let Some(breed) = catalog.get(self.record) {
            self.shown = breed.clone();
        }
        self.mode = DetailMode::Viewing;
        Ok(())
    }

    pub fn input(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        if let DetailMode::Editing { focus, .. } = &mut self.mode {
            *focus = focus.next();
        }
    }

    pub fn prev_field(&mut self) {
        if let DetailMode::Editing { focus, .. } = &mut self.mode {
            *focus = focus.prev();
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match &mut self.mode {
            DetailMode::Viewing => None,
            DetailMode::Editing { fields, focus } => Some(match focus {
                EditField::Name => &mut fields.name,
                EditField::Origin => &mut fields.origin,
                EditField::Temperament => &mut fields.temperament,
                EditField::Description => &mut fields.description,
            }),
        }
    }
}

impl BreedEdit {
    pub fn get(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Origin => &self.origin,
            EditField::Temperament => &self.temperament,
            EditField::Description => &self.description,
        }
    }
}
