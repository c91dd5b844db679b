//! Reachability analysis deciding which models need JSON helpers.
//!
//! RPC inputs are marshaled and RPC outputs unmarshaled, and so is everything
//! they reach through message-typed fields. Models outside that closure get
//! interfaces only.
//!
//! The message graph may be cyclic (`message Node { Node parent = 1; }`), so
//! each direction is closed with a worklist and a visited set: a model is
//! queued at most once per direction.

use super::ir::{ApiContext, Model};
use crate::error::{GenerateError, GenerateResult};
use std::collections::{HashSet, VecDeque};

/// Which JSON helper a flag controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `NameToJSON`, needed for request payloads.
    Marshal,
    /// `JSONToName`, needed for response payloads.
    Unmarshal,
}

impl Direction {
    fn is_set(self, model: &Model) -> bool {
        match self {
            Direction::Marshal => model.can_marshal,
            Direction::Unmarshal => model.can_unmarshal,
        }
    }

    fn set(self, model: &mut Model) {
        match self {
            Direction::Marshal => model.can_marshal = true,
            Direction::Unmarshal => model.can_unmarshal = true,
        }
    }
}

/// Seed flags from service methods and close them over field references.
pub fn apply_marshal_flags(ctx: &mut ApiContext) -> GenerateResult<()> {
    seed_from_services(ctx)?;
    close(ctx, Direction::Marshal)?;
    close(ctx, Direction::Unmarshal)?;

    tracing::debug!(
        "Marshal flags applied: {} marshal, {} unmarshal of {} models",
        ctx.models().iter().filter(|m| m.can_marshal).count(),
        ctx.models().iter().filter(|m| m.can_unmarshal).count(),
        ctx.models().len()
    );
    Ok(())
}

fn seed_from_services(ctx: &mut ApiContext) -> GenerateResult<()> {
    let mut seeds = Vec::new();
    for service in ctx.services() {
        for method in &service.methods {
            let referenced_by = || format!("{}.{}", service.name, method.path);
            let input = ctx
                .index_of(&method.input_type)
                .ok_or_else(|| GenerateError::unknown_model(method.input_type.as_str(), referenced_by()))?;
            let output = ctx
                .index_of(&method.output_type)
                .ok_or_else(|| GenerateError::unknown_model(method.output_type.as_str(), referenced_by()))?;

            seeds.push((input, Direction::Marshal));
            seeds.push((output, Direction::Unmarshal));
        }
    }

    for (index, direction) in seeds {
        direction.set(ctx.model_at_mut(index));
    }
    Ok(())
}

/// Propagate `direction` from every flagged model to everything it references.
fn close(ctx: &mut ApiContext, direction: Direction) -> GenerateResult<()> {
    let mut queue: VecDeque<usize> = (0..ctx.models().len())
        .filter(|&index| direction.is_set(ctx.model_at(index)))
        .collect();
    let mut visited: HashSet<usize> = queue.iter().copied().collect();

    while let Some(index) = queue.pop_front() {
        for target in ctx.references_of(index)? {
            if !visited.insert(target) {
                continue;
            }

            let model = ctx.model_at_mut(target);
            direction.set(model);
            tracing::trace!("{:?} enabled for {}", direction, model.name);
            queue.push_back(target);
        }
    }

    Ok(())
}
