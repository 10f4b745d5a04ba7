use crate::builder::PositionAwareTextBuilder;
use crate::component::{file_base_name, CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::first_tag;

/// Emits the `@salesforce/customPermission/<Name>` module, exposing a
/// `has<Name>` boolean. The permission name comes from the file name;
/// alignment anchors on the `label` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let permission_name = file_base_name(&unit.path)
        .ok_or_else(|| ConvertError::structural(&unit.path, "cannot determine permission name"))?;
    let Some(label) = first_tag(&unit.content, "label") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };
    let description = first_tag(&unit.content, "description").map_or("", |tag| tag.value);

    let mut builder = PositionAwareTextBuilder::new();
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("\"@salesforce/customPermission/{}\"", permission_name),
        label.start,
        label.end,
    );
    builder.add_plain(&format!(
        " {{\n  /**\n   * {}\n   *\n   * @description {}\n   */\n  const ",
        label.value, description
    ));
    builder.add_anchored(
        &format!("has{}", permission_name),
        label.start,
        label.end,
    );
    builder.add_plain(&format!(
        ":boolean;\n  export default has{};\n}}",
        permission_name
    ));
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
