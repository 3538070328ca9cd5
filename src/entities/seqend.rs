//! SEQEND entity

use super::binding::{bind_common, Bind, Pass};
use super::{Entity, EntityCommon};

/// End of a VERTEX or ATTRIB sequence; carries only common data
#[derive(Debug, Clone, Default)]
pub struct SeqEnd {
    /// Common entity data
    pub common: EntityCommon,
}

impl Entity for SeqEnd {
    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn dxftype(&self) -> &'static str {
        "SEQEND"
    }
}

impl Bind for SeqEnd {
    const PASSES: &'static [Pass<Self>] = &[Pass::new(bind_common)];
}
