/**
 * Custom Permission Conversion Tests
 */

#[cfg(test)]
mod tests {
    use sf2ts::{AlignmentPair, Converter, MetadataKind, SourceUnit};

    const PERMISSION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomPermission xmlns="http://soap.sforce.com/2006/04/metadata">
  <description>Test permission that does stuff</description>
  <isLicensed>false</isLicensed>
  <label>Disable DLRS</label>
</CustomPermission>
"#;

    #[test]
    fn transforms_a_custom_permission() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "customPermissions/TestPerm.customPermission-meta.xml",
            MetadataKind::CustomPermission,
            PERMISSION_XML,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(
            compiled.declaration_text,
            r#"declare module "@salesforce/customPermission/TestPerm" {
  /**
   * Disable DLRS
   *
   * @description Test permission that does stuff
   */
  const hasTestPerm:boolean;
  export default hasTestPerm;
}"#
        );

        // Both anchored chunks map onto the label element value.
        let label_start = PERMISSION_XML.find("Disable DLRS").unwrap();
        let label_end = label_start + "Disable DLRS".len();
        let specifier_start = compiled.declaration_text.find('"').unwrap();
        let specifier_end = specifier_start + "\"@salesforce/customPermission/TestPerm\"".len();
        let const_start = compiled.declaration_text.find("hasTestPerm").unwrap();
        let const_end = const_start + "hasTestPerm".len();
        assert_eq!(
            compiled.alignment,
            vec![
                AlignmentPair::new(label_start, specifier_start),
                AlignmentPair::new(label_end, specifier_end),
                AlignmentPair::new(label_start, const_start),
                AlignmentPair::new(label_end, const_end),
            ]
        );
    }

    #[test]
    fn permission_without_a_label_converts_to_nothing() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "customPermissions/TestPerm.customPermission-meta.xml",
            MetadataKind::CustomPermission,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomPermission xmlns="http://soap.sforce.com/2006/04/metadata">
  <isLicensed>false</isLicensed>
</CustomPermission>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(compiled.declaration_text, "");
        assert!(compiled.alignment.is_empty());
    }
}
