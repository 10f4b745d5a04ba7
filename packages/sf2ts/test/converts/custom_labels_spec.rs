/**
 * Custom Labels Conversion Tests
 *
 * A labels descriptor is a collection; every entry emits its own module
 * block and entries without a fullName are skipped.
 */

#[cfg(test)]
mod tests {
    use sf2ts::{AlignmentPair, Converter, MetadataKind, SourceUnit};

    #[test]
    fn generates_declarations_from_custom_labels() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "CustomLabels.labels-meta.xml",
            MetadataKind::CustomLabels,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomLabels xmlns="http://soap.sforce.com/2006/04/metadata">
    <labels>
        <fullName>Account</fullName>
        <categories>CategoryOne</categories>
        <language>en_US</language>
        <protected>false</protected>
        <shortDescription>Account Description</shortDescription>
        <value>Label Value</value>
    </labels>
    <labels>
        <fullName>Australia</fullName>
        <categories>CategoryOne</categories>
        <language>en_US</language>
        <protected>false</protected>
        <shortDescription>Australia</shortDescription>
        <value>Australia</value>
    </labels>
    <labels>
        <fullName>Austria</fullName>
        <categories>CategoryTwo</categories>
        <language>en_US</language>
        <protected>false</protected>
        <shortDescription>Austria</shortDescription>
        <value>Austria</value>
    </labels>
</CustomLabels>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(
            compiled.declaration_text,
            r#"declare module "@salesforce/label/c.Account" {
  /**
   * @description Account Description
   */
  const lblAccount = 'Label Value';
  export default lblAccount;
}
declare module "@salesforce/label/c.Australia" {
  /**
   * @description Australia
   */
  const lblAustralia = 'Australia';
  export default lblAustralia;
}
declare module "@salesforce/label/c.Austria" {
  /**
   * @description Austria
   */
  const lblAustria = 'Austria';
  export default lblAustria;
}
"#
        );
        assert_eq!(
            compiled.alignment,
            vec![
                AlignmentPair::new(133, 15),
                AlignmentPair::new(140, 44),
                AlignmentPair::new(133, 105),
                AlignmentPair::new(140, 115),
                AlignmentPair::new(414, 179),
                AlignmentPair::new(423, 210),
                AlignmentPair::new(414, 261),
                AlignmentPair::new(423, 273),
                AlignmentPair::new(685, 337),
                AlignmentPair::new(692, 366),
                AlignmentPair::new(685, 415),
                AlignmentPair::new(692, 425),
            ]
        );
    }

    #[test]
    fn entries_without_a_full_name_are_skipped() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "CustomLabels.labels-meta.xml",
            MetadataKind::CustomLabels,
            r#"<CustomLabels>
    <labels>
        <value>Orphan</value>
    </labels>
    <labels>
        <fullName>Kept</fullName>
        <shortDescription>Kept</shortDescription>
        <value>Kept</value>
    </labels>
</CustomLabels>
"#,
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(
            compiled.declaration_text,
            r#"declare module "@salesforce/label/c.Kept" {
  /**
   * @description Kept
   */
  const lblKept = 'Kept';
  export default lblKept;
}
"#
        );
        assert_eq!(compiled.alignment.len(), 4);
    }

    #[test]
    fn empty_collection_converts_to_nothing() {
        let converter = Converter::default();
        let unit = SourceUnit::new(
            "CustomLabels.labels-meta.xml",
            MetadataKind::CustomLabels,
            "<CustomLabels xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n</CustomLabels>\n",
        );
        let compiled = converter.convert(&unit).unwrap();
        assert_eq!(compiled.declaration_text, "");
        assert!(compiled.alignment.is_empty());
    }
}
