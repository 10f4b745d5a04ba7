/**
 * Static Resource Conversion Tests
 */

#[cfg(test)]
mod tests {
    use sf2ts::{AlignmentPair, Converter, MetadataKind, SourceUnit};

    #[test]
    fn generates_a_declaration_from_a_static_resource() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "staticresources/TextRaw.resource-meta.xml",
            MetadataKind::StaticResource,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<StaticResource xmlns="http://soap.sforce.com/2006/04/metadata">
    <cacheControl>Private</cacheControl>
    <contentType>text/plain</contentType>
    <description>Logo for the the package</description>
</StaticResource>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(
            compiled.declaration_text,
            r#"declare module "@salesforce/resourceUrl/TextRaw" {
  /**
   * @description Logo for the the package
   * @access Private
   */
  const TextRaw:string;
  export default TextRaw;
}"#
        );
        assert_eq!(
            compiled.alignment,
            vec![
                AlignmentPair::new(204, 15),
                AlignmentPair::new(228, 48),
                AlignmentPair::new(204, 135),
                AlignmentPair::new(228, 142),
            ]
        );
    }

    #[test]
    fn resource_without_a_description_converts_to_nothing() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "staticresources/TextRaw.resource-meta.xml",
            MetadataKind::StaticResource,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<StaticResource xmlns="http://soap.sforce.com/2006/04/metadata">
    <cacheControl>Private</cacheControl>
    <contentType>text/plain</contentType>
</StaticResource>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(compiled.declaration_text, "");
        assert!(compiled.alignment.is_empty());
    }
}
