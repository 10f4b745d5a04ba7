use crate::builder::PositionAwareTextBuilder;
use crate::component::{file_base_name, CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::first_tag;

/// Emits the `@salesforce/schema/<Object>.<Field>` module for a custom
/// field descriptor. The field name comes from the file name and the
/// object name from the grandparent directory (`objects/<Object>/fields/`),
/// while alignment anchors on the `fullName` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let field_name = file_base_name(&unit.path)
        .ok_or_else(|| ConvertError::structural(&unit.path, "cannot determine field name"))?;
    let mut ancestors = unit.path.rsplit('/');
    ancestors.next();
    ancestors.next();
    let object_name = ancestors
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ConvertError::structural(&unit.path, "cannot determine object name"))?;
    let Some(full_name) = first_tag(&unit.content, "fullName") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };
    let help_text = first_tag(&unit.content, "inlineHelpText").map_or("", |tag| tag.value);
    let description = first_tag(&unit.content, "description").map_or("", |tag| tag.value);

    let mut builder = PositionAwareTextBuilder::new();
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("'@salesforce/schema/{}.{}'", object_name, field_name),
        full_name.start,
        full_name.end,
    );
    builder.add_plain(&format!(
        " {{\n  /**\n   * @description {}\n   * @description {}\n   */\n  const ",
        help_text, description
    ));
    builder.add_anchored(field_name, full_name.start, full_name.end);
    builder.add_plain(&format!(
        ": {{\n    fieldApiName: '{}';\n    objectApiName: '{}';\n  }}\n  export default {};\n}}",
        field_name, object_name, field_name
    ));
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
