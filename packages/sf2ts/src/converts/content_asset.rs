use crate::builder::PositionAwareTextBuilder;
use crate::component::{CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::first_tag;

/// Emits the `@salesforce/contentAssetUrl` module for a content asset
/// descriptor, anchored on the `masterLabel` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let Some(label) = first_tag(&unit.content, "masterLabel") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };

    let mut builder = PositionAwareTextBuilder::new();
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("\"@salesforce/contentAssetUrl/{}\"", label.value),
        label.start,
        label.end,
    );
    builder.add_plain(" {\n  const ");
    builder.add_anchored(label.value, label.start, label.end);
    builder.add_plain(&format!(
        ": string;\n  export default {};\n}}",
        label.value
    ));
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
