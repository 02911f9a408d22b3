use std::fmt;

use serde::{Deserialize, Serialize};

/// Un destino que el usuario ya visitó. La etiqueta es una proyección
/// de la posición en la lista (A, B, C, ...), nunca un dato independiente.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub label: String,
    pub name: String,
}

/// Errores de validación al añadir un destino. Se muestran al usuario
/// como alertas bloqueantes y nunca modifican la lista.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestinationError {
    Empty,
    InvalidChars,
    Duplicate,
}

impl fmt::Display for DestinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DestinationError::Empty | DestinationError::InvalidChars => {
                "Introduce un contenido válido (solo letras, números y espacios)"
            }
            DestinationError::Duplicate => {
                "Este destino ya está en la lista. Introduce otro distinto."
            }
        };
        write!(f, "{}", message)
    }
}

/// Etiqueta ordinal para una posición: 0 → "A", 25 → "Z", 26 → "AA", 27 → "AB".
/// Pasado el alfabeto se usa base 26 biyectiva, estilo columnas de hoja de cálculo.
pub fn ordinal_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label
}

/// Lista ordenada de destinos con nombres únicos y etiquetas contiguas.
///
/// Invariante tras cada mutación: `items[i].label == ordinal_label(i)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DestinationList {
    items: Vec<Destination>,
}

impl DestinationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruye la lista desde entradas sueltas, reetiquetando por si
    /// las etiquetas de origen no fueran contiguas.
    pub fn from_items(items: Vec<Destination>) -> Self {
        let mut list = Self { items };
        list.relabel();
        list
    }

    pub fn items(&self) -> &[Destination] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Destination> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Añade un destino escrito por el usuario. Valida el contenido
    /// (letras de cualquier alfabeto, dígitos y espacios) y rechaza
    /// duplicados exactos tras recortar espacios.
    pub fn add(&mut self, name: &str) -> Result<(), DestinationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DestinationError::Empty);
        }
        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(DestinationError::InvalidChars);
        }
        if self.items.iter().any(|d| d.name == trimmed) {
            return Err(DestinationError::Duplicate);
        }

        self.items.push(Destination {
            label: ordinal_label(self.items.len()),
            name: trimmed.to_string(),
        });
        Ok(())
    }

    /// Añade un resultado elegido del buscador. El backend ya validó el
    /// nombre, así que aquí no se revalida ni se comprueban duplicados.
    pub fn add_from_search(&mut self, name: &str) {
        self.items.push(Destination {
            label: ordinal_label(self.items.len()),
            name: name.to_string(),
        });
    }

    /// Elimina la entrada en `index`. Fuera de rango no hace nada.
    pub fn delete(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            self.relabel();
        }
    }

    /// Mueve la entrada de `from` a `to` (extraer y reinsertar, no swap)
    /// y recalcula todas las etiquetas. Fuera de rango no hace nada.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.items.len() || to >= self.items.len() || from == to {
            return;
        }
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        self.relabel();
    }

    fn relabel(&mut self) {
        for (index, destination) in self.items.iter_mut().enumerate() {
            destination.label = ordinal_label(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &DestinationList) -> Vec<&str> {
        list.items().iter().map(|d| d.name.as_str()).collect()
    }

    fn assert_labels_contiguous(list: &DestinationList) {
        for (index, destination) in list.items().iter().enumerate() {
            assert_eq!(destination.label, ordinal_label(index));
        }
    }

    #[test]
    fn ordinal_labels() {
        assert_eq!(ordinal_label(0), "A");
        assert_eq!(ordinal_label(1), "B");
        assert_eq!(ordinal_label(25), "Z");
        assert_eq!(ordinal_label(26), "AA");
        assert_eq!(ordinal_label(27), "AB");
        assert_eq!(ordinal_label(51), "AZ");
        assert_eq!(ordinal_label(52), "BA");
    }

    #[test]
    fn add_assigns_next_label() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add("Busan").unwrap();
        assert_eq!(list.items()[0].label, "A");
        assert_eq!(list.items()[1].label, "B");
    }

    #[test]
    fn add_trims_whitespace() {
        let mut list = DestinationList::new();
        list.add("  Madrid  ").unwrap();
        assert_eq!(list.items()[0].name, "Madrid");
    }

    #[test]
    fn add_rejects_empty_input() {
        let mut list = DestinationList::new();
        assert_eq!(list.add(""), Err(DestinationError::Empty));
        assert_eq!(list.add("   "), Err(DestinationError::Empty));
        assert!(list.is_empty());
    }

    #[test]
    fn add_rejects_invalid_chars() {
        let mut list = DestinationList::new();
        assert_eq!(list.add("Seúl!"), Err(DestinationError::InvalidChars));
        assert_eq!(list.add("a@b"), Err(DestinationError::InvalidChars));
        assert!(list.is_empty());
    }

    #[test]
    fn add_accepts_any_script_and_digits() {
        let mut list = DestinationList::new();
        list.add("서울").unwrap();
        list.add("Gangnam 2").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_rejects_duplicates_after_trim() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        assert_eq!(list.add("  Seúl "), Err(DestinationError::Duplicate));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add("seúl").unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_from_search_skips_validation() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add_from_search("Seúl");
        assert_eq!(list.len(), 2);
        assert_labels_contiguous(&list);
    }

    #[test]
    fn delete_relabels_remaining_entries() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add("Busan").unwrap();
        list.add("Jeju").unwrap();
        list.delete(0);
        assert_eq!(names(&list), vec!["Busan", "Jeju"]);
        assert_labels_contiguous(&list);
    }

    #[test]
    fn delete_out_of_range_is_noop() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.delete(5);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn reorder_is_splice_and_insert() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add("Busan").unwrap();
        list.add("Jeju").unwrap();
        list.reorder(0, 2);
        assert_eq!(names(&list), vec!["Busan", "Jeju", "Seúl"]);
        assert_labels_contiguous(&list);
    }

    #[test]
    fn reorder_preserves_the_set_of_names() {
        let mut list = DestinationList::new();
        for name in ["a", "b", "c", "d"] {
            list.add(name).unwrap();
        }
        list.reorder(3, 1);
        let mut sorted = names(&list);
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
        assert_eq!(names(&list), vec!["a", "d", "b", "c"]);
        assert_labels_contiguous(&list);
    }

    #[test]
    fn reorder_out_of_range_is_noop() {
        let mut list = DestinationList::new();
        list.add("Seúl").unwrap();
        list.add("Busan").unwrap();
        list.reorder(0, 7);
        list.reorder(7, 0);
        assert_eq!(names(&list), vec!["Seúl", "Busan"]);
    }

    #[test]
    fn labels_stay_contiguous_past_the_alphabet() {
        let mut list = DestinationList::new();
        for i in 0..30 {
            list.add_from_search(&format!("lugar {}", i));
        }
        assert_eq!(list.items()[25].label, "Z");
        assert_eq!(list.items()[26].label, "AA");
        assert_eq!(list.items()[29].label, "AD");
        assert_labels_contiguous(&list);
    }

    // Escenario completo: añadir, reordenar y borrar manteniendo el invariante.
    #[test]
    fn full_scenario() {
        let mut list = DestinationList::new();
        list.add("Seoul").unwrap();
        assert_eq!(
            list.items(),
            &[Destination {
                label: "A".into(),
                name: "Seoul".into()
            }]
        );

        list.add("Busan").unwrap();
        assert_eq!(names(&list), vec!["Seoul", "Busan"]);

        list.reorder(0, 1);
        assert_eq!(names(&list), vec!["Busan", "Seoul"]);
        assert_eq!(list.items()[0].label, "A");
        assert_eq!(list.items()[1].label, "B");

        list.delete(0);
        assert_eq!(
            list.items(),
            &[Destination {
                label: "A".into(),
                name: "Seoul".into()
            }]
        );
    }
}
