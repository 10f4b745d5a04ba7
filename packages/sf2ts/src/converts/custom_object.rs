use crate::builder::PositionAwareTextBuilder;
use crate::component::{file_base_name, CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::first_tag;

/// Emits the `@salesforce/schema/<Object>` module for a custom object
/// descriptor. The object name comes from the file name; alignment anchors
/// on the `label` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let object_name = file_base_name(&unit.path)
        .ok_or_else(|| ConvertError::structural(&unit.path, "cannot determine object name"))?;
    let Some(label) = first_tag(&unit.content, "label") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };
    let description = first_tag(&unit.content, "description").map_or("", |tag| tag.value);

    let mut builder = PositionAwareTextBuilder::new();
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("\"@salesforce/schema/{}\"", object_name),
        label.start,
        label.end,
    );
    builder.add_plain(&format!(
        " {{\n  /**\n   * @description {}\n   */\n  const ",
        description
    ));
    builder.add_anchored(object_name, label.start, label.end);
    builder.add_plain(&format!(
        ": {{\n      objectApiName: '{}';\n  }}\n  export default {};\n}}",
        object_name, object_name
    ));
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
