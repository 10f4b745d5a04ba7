/**
 * Apex class units: parse through the warm-up-gated service, then compile
 * the tree into ambient declarations with alignment.
 */
use crate::apex::declaration::DeclarationCompiler;
use crate::apex::service::{ApexParserService, ParserServiceError};
use crate::component::{CompiledUnit, SourceUnit};
use crate::error::ConvertError;
use crate::logging::Logger;

pub fn convert(
    unit: &SourceUnit,
    apex: &ApexParserService,
    logger: &dyn Logger,
) -> Result<CompiledUnit, ConvertError> {
    let parsed = apex.parse(&unit.content).map_err(|err| match err {
        ParserServiceError::NotReady(readiness) => ConvertError::NotReady { readiness },
        ParserServiceError::Syntax(source) => ConvertError::Parse {
            path: unit.path.clone(),
            source,
        },
    })?;
    let (declaration_text, alignment) = DeclarationCompiler::new(logger)
        .compile(&parsed, false)
        .map_err(|err| ConvertError::structural(&unit.path, err.0))?;
    Ok(CompiledUnit::new(unit, declaration_text, alignment))
}
