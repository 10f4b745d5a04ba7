/**
 * Custom Object Conversion Tests
 */

#[cfg(test)]
mod tests {
    use sf2ts::{AlignmentPair, Converter, MetadataKind, SourceUnit};

    #[test]
    fn transforms_a_custom_object() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "objects/Test_Object__c.object-meta.xml",
            MetadataKind::CustomObject,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomObject xmlns="http://soap.sforce.com/2006/04/metadata">
    <deploymentStatus>Deployed</deploymentStatus>
    <description>Object representing test data</description>
    <label>Test Object</label>
    <nameField>
        <label>Test Object Id</label>
        <type>Text</type>
    </nameField>
    <pluralLabel>Test Objects</pluralLabel>
</CustomObject>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(
            compiled.declaration_text,
            r#"declare module "@salesforce/schema/Test_Object__c" {
  /**
   * @description Object representing test data
   */
  const Test_Object__c: {
      objectApiName: 'Test_Object__c';
  }
  export default Test_Object__c;
}"#
        );
        assert_eq!(
            compiled.alignment,
            vec![
                AlignmentPair::new(224, 15),
                AlignmentPair::new(235, 50),
                AlignmentPair::new(224, 121),
                AlignmentPair::new(235, 135),
            ]
        );
    }

    #[test]
    fn object_without_a_label_converts_to_nothing() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "objects/Test_Object__c.object-meta.xml",
            MetadataKind::CustomObject,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomObject xmlns="http://soap.sforce.com/2006/04/metadata">
    <deploymentStatus>Deployed</deploymentStatus>
</CustomObject>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(compiled.declaration_text, "");
        assert!(compiled.alignment.is_empty());
    }
}
