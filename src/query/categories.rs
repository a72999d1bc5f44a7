use crate::models::{Category, CategoryKind, DecodedDataset};

/// Categories for one grouping axis, in dictionary table order.
///
/// Previews were truncated when the dataset was decoded.
pub fn list_categories(dataset: &DecodedDataset, kind: CategoryKind) -> &[Category] {
    dataset.categories.get(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{decode_store, DecodeOptions};

    #[test]
    fn test_lists_each_kind() {
        let dataset = decode_store(
            br#"{"programs":["Acme","Globex"],"vulnTypes":["XSS"]}"#,
            &DecodeOptions::default(),
        )
        .unwrap();

        let programs = list_categories(&dataset, CategoryKind::Program);
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[1].name, "Globex");
        assert_eq!(programs[1].identifier, "program_1");

        let bug_types = list_categories(&dataset, CategoryKind::BugType);
        assert_eq!(bug_types.len(), 1);
        assert_eq!(bug_types[0].identifier, "vuln_0");
        assert!(bug_types[0].preview.ends_with("..."));
    }

    #[test]
    fn test_empty_tables_give_empty_lists() {
        let dataset = DecodedDataset::default();
        assert!(list_categories(&dataset, CategoryKind::Program).is_empty());
        assert!(list_categories(&dataset, CategoryKind::BugType).is_empty());
    }
}
