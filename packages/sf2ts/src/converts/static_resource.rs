use crate::builder::PositionAwareTextBuilder;
use crate::component::{file_base_name, CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::first_tag;

/// Emits the `@salesforce/resourceUrl/<Name>` module for a static resource
/// descriptor. The resource name comes from the file name; alignment
/// anchors on the `description` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let resource_name = file_base_name(&unit.path)
        .ok_or_else(|| ConvertError::structural(&unit.path, "cannot determine resource name"))?;
    let Some(description) = first_tag(&unit.content, "description") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };
    let cache_control = first_tag(&unit.content, "cacheControl").map_or("", |tag| tag.value);

    let mut builder = PositionAwareTextBuilder::new();
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("\"@salesforce/resourceUrl/{}\"", resource_name),
        description.start,
        description.end,
    );
    builder.add_plain(&format!(
        " {{\n  /**\n   * @description {}\n   * @access {}\n   */\n  const ",
        description.value, cache_control
    ));
    builder.add_anchored(resource_name, description.start, description.end);
    builder.add_plain(&format!(
        ":string;\n  export default {};\n}}",
        resource_name
    ));
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
