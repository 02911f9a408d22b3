/// Quita etiquetas HTML de un texto. El buscador devuelve los títulos
/// con los términos coincidentes envueltos en <b>...</b>.
pub fn strip_html_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => output.push(c),
            _ => {}
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_highlight_markup() {
        assert_eq!(strip_html_tags("<b>Seúl</b> Torre N"), "Seúl Torre N");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(strip_html_tags("Playa de Haeundae"), "Playa de Haeundae");
    }

    #[test]
    fn unclosed_tag_drops_the_rest() {
        assert_eq!(strip_html_tags("Busan <b"), "Busan ");
    }
}
