use crate::builder::PositionAwareTextBuilder;
use crate::component::{CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::{first_tag, TagSpan};

/// Emits the `@salesforce/label/c.<Name>` module for a single-label
/// descriptor, anchored on the `fullName` value.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let Some(full_name) = first_tag(&unit.content, "fullName") else {
        return Ok(CompiledUnit::not_applicable(unit));
    };
    let short_description = first_tag(&unit.content, "shortDescription").map_or("", |tag| tag.value);
    let value = first_tag(&unit.content, "value").map_or("", |tag| tag.value);

    let mut builder = PositionAwareTextBuilder::new();
    emit_label(&mut builder, &full_name, short_description, value);
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}

/// Appends one label's module block; shared with the collection form.
pub(crate) fn emit_label(
    builder: &mut PositionAwareTextBuilder,
    full_name: &TagSpan<'_>,
    short_description: &str,
    value: &str,
) {
    builder.add_plain("declare module ");
    builder.add_anchored(
        &format!("\"@salesforce/label/c.{}\"", full_name.value),
        full_name.start,
        full_name.end,
    );
    builder.add_plain(&format!(
        " {{\n  /**\n   * @description {}\n   */\n  const ",
        short_description
    ));
    builder.add_anchored(
        &format!("lbl{}", full_name.value),
        full_name.start,
        full_name.end,
    );
    builder.add_plain(&format!(
        " = '{}';\n  export default lbl{};\n}}\n",
        value, full_name.value
    ));
}
