use crate::builder::PositionAwareTextBuilder;
use crate::component::{CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::xml::{element_blocks, first_tag, TagSpan};

use super::custom_label::emit_label;

/// Emits one `@salesforce/label/c.<Name>` module per `<labels>` element of
/// a labels collection, in document order. Elements without a `fullName`
/// are skipped; a collection yielding nothing compiles to the empty
/// declaration.
pub fn convert(unit: &SourceUnit) -> Result<CompiledUnit, ConvertError> {
    let mut builder = PositionAwareTextBuilder::new();
    for block in element_blocks(&unit.content, "labels") {
        let body = &unit.content[block.clone()];
        let Some(full_name) = first_tag(body, "fullName") else {
            continue;
        };
        // Spans are relative to the element body; shift them back into
        // whole-document offsets before they reach the builder.
        let full_name = TagSpan {
            value: full_name.value,
            start: full_name.start + block.start,
            end: full_name.end + block.start,
        };
        let short_description = first_tag(body, "shortDescription").map_or("", |tag| tag.value);
        let value = first_tag(body, "value").map_or("", |tag| tag.value);
        emit_label(&mut builder, &full_name, short_description, value);
    }
    Ok(CompiledUnit::new(unit, builder.build(), builder.alignment()))
}
