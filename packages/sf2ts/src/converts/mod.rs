/**
 * One converter per metadata kind. Dispatch is an exhaustive match over
 * `MetadataKind`; every kind has exactly one emitter.
 */
pub mod apex_class;
pub mod content_asset;
pub mod custom_field;
pub mod custom_label;
pub mod custom_labels;
pub mod custom_object;
pub mod custom_permission;
pub mod static_resource;

use crate::apex::service::ApexParserService;
use crate::component::{CompiledUnit, MetadataKind, SourceUnit};
use crate::error::ConvertError;
use crate::logging::Logger;

pub fn convert_unit(
    unit: &SourceUnit,
    apex: &ApexParserService,
    logger: &dyn Logger,
) -> Result<CompiledUnit, ConvertError> {
    match unit.kind {
        MetadataKind::ApexClass => apex_class::convert(unit, apex, logger),
        MetadataKind::ContentAsset => content_asset::convert(unit),
        MetadataKind::CustomField => custom_field::convert(unit),
        MetadataKind::CustomLabel => custom_label::convert(unit),
        MetadataKind::CustomLabels => custom_labels::convert(unit),
        MetadataKind::CustomObject => custom_object::convert(unit),
        MetadataKind::CustomPermission => custom_permission::convert(unit),
        MetadataKind::StaticResource => static_resource::convert(unit),
    }
}
