//! Generation pipeline: filter → tuple synthesis → wrapper building → ordering.
//!
//! Failures are isolated per declaration: a failed nested declaration loses
//! its own wrapper, not its parent's. When a declaration fails, anything that
//! refers to it must fail too, and a tuple shape it introduced may no longer
//! clash with anyone. The pipeline therefore runs in rounds:
//! every round starts from a fresh namespace and tuple table, and a round
//! that produces new failures marks them and starts over.

use wrapgen_core::{Declaration, DeclarationGraph, QualifiedName};

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, NameSource};
use crate::emit::GeneratedModule;
use crate::filter::{Filter, FilteredDecl};
use crate::namespace::Namespace;
use crate::resolve::DeclIndex;
use crate::tuples::TupleTable;
use crate::wrapper::WrapperBuilder;
use crate::{Config, Error, Result};

/// Output of one generation pass.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    /// Wrappers for every declaration that did not fail.
    pub module: GeneratedModule,
    pub diagnostics: Diagnostics,
}

impl Generation {
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// The module, or every diagnostic if any declaration failed.
    pub fn into_result(self) -> Result<GeneratedModule> {
        if self.diagnostics.has_errors() {
            return Err(Error::GenerationFailed(self.diagnostics));
        }
        Ok(self.module)
    }
}

/// Generate wrappers for every wrappable declaration in `graph`.
pub fn generate(graph: &DeclarationGraph, config: &Config) -> Generation {
    let mut diagnostics = Diagnostics::new();
    let mut index = DeclIndex::build(graph, &mut diagnostics);

    let mut round = 0;
    loop {
        round += 1;
        let outcome = run_round(&index, config);

        match outcome {
            Round::Done { filtered, tuples } => {
                let builder = WrapperBuilder::new(config, &tuples);
                let wrappers = filtered.iter().map(|f| builder.build(f)).collect();
                let module = GeneratedModule::new(wrappers, builder.build_tuples());
                tracing::debug!(
                    rounds = round,
                    declarations = module.len(),
                    failures = diagnostics.len(),
                    "generation finished"
                );
                return Generation {
                    module,
                    diagnostics,
                };
            }
            Round::Failed(failures) => {
                tracing::debug!(round, failures = failures.len(), "generation round failed");
                for diagnostic in failures {
                    index.mark_failed(diagnostic.declaration());
                    diagnostics.push(diagnostic);
                }
            }
        }
    }
}

enum Round<'a> {
    Done {
        filtered: Vec<FilteredDecl<'a>>,
        tuples: TupleTable,
    },
    /// One diagnostic per declaration that must be aborted, top-level or nested.
    Failed(Vec<Diagnostic>),
}

fn run_round<'a>(index: &DeclIndex<'a>, config: &Config) -> Round<'a> {
    let mut candidates: Vec<(QualifiedName, &'a Declaration)> = index
        .top_level()
        .map(|(path, decl)| (path.clone(), decl))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0));

    let mut namespace = Namespace::new();
    for path in index.top_level_paths() {
        namespace.reserve(path.last(), NameSource::Declaration(path.clone()));
    }

    let mut failures = Vec::new();
    for (path, _) in &candidates {
        let wrapper = config.wrapper_name(path.last());
        let claimed = namespace.claim(wrapper.clone(), NameSource::Wrapper(path.clone()));
        if let Err(owner) = claimed {
            let diagnostic =
                Diagnostic::new(DiagnosticKind::WrapperNameCollision, path.clone())
                    .with_detail(&wrapper)
                    .with_related(owner);
            failures.push(diagnostic);
        }
    }

    let filter = Filter::new(index);
    let mut filtered = Vec::with_capacity(candidates.len());
    let mut nested_failures = Vec::new();
    for (path, decl) in &candidates {
        if failures.iter().any(|failed| failed.declaration() == path) {
            continue;
        }
        match filter.filter(path, *decl, &mut nested_failures) {
            Ok(surviving) => filtered.push(surviving),
            Err(diagnostic) => failures.push(diagnostic),
        }
    }
    failures.extend(nested_failures);
    if !failures.is_empty() {
        return Round::Failed(failures);
    }

    let mut tuples = TupleTable::new(config.tuple_prefix.clone());
    for decl in &filtered {
        if let Err(collision) = tuples.register_all(decl.tuple_shapes(), &namespace) {
            let diagnostic =
                Diagnostic::new(DiagnosticKind::TupleNameCollision, decl.path.clone())
                    .with_detail(&collision.name)
                    .with_related(collision.owner);
            failures.push(diagnostic);
        }
    }
    if !failures.is_empty() {
        return Round::Failed(failures);
    }

    Round::Done { filtered, tuples }
}
