use crate::convert::{MapShape, SliceElement};
use crate::kind::PrimitiveKind;

/// Descriptors the engine accepts at depth one, derived from the closed
/// sets of the grammar:
/// 1. every primitive keyword
/// 2. `[]<elem>` for each supported slice element
/// 3. each supported map shape
/// 4. `*<keyword>` for each primitive keyword
///
/// Deeper nestings (`*[]int`, `**bool`) are accepted too but not listed.
pub fn supported_types() -> Vec<String> {
    let primitives = PrimitiveKind::ALL.iter().map(|k| k.keyword().to_string());
    let slices = SliceElement::ALL.iter().map(|e| format!("[]{}", e.kind()));
    let maps = MapShape::ALL.iter().map(|s| s.to_string());
    let pointers = PrimitiveKind::ALL.iter().map(|k| format!("*{k}"));
    primitives.chain(slices).chain(maps).chain(pointers).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;

    #[test]
    fn lists_every_primitive_keyword_first() {
        let types = supported_types();
        for (i, kind) in PrimitiveKind::ALL.iter().enumerate() {
            assert_eq!(types[i], kind.keyword());
        }
        assert!(types.contains(&"map[string]int".to_string()));
        assert!(types.contains(&"[]float64".to_string()));
        assert!(types.contains(&"*[]byte".to_string()));
    }

    #[test]
    fn entries_are_unique_and_parse_to_known_shapes() {
        let types = supported_types();
        let mut dedup = types.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), types.len());

        for t in &types {
            let d = TypeDescriptor::parse(t).unwrap();
            assert!(!matches!(d, TypeDescriptor::Object(_)), "{t}");
            assert_eq!(&d.to_string(), t);
        }
    }
}
