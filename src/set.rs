// used for the membership of a set
use roaring::RoaringBitmap;
use tracing::debug;

// used to print out readable forms of a set
use std::fmt;

use crate::config::Domain;
use crate::error::{FilesetsError, Result};
use crate::token::Operator;

// ------------- Set -------------
/// A set of IDs over a [`Domain`], together with the provenance of the
/// sub-expression that produced it.
///
/// The algebra consumes its operands: the left operand's bitset is reused for
/// the result and the right operand is dropped, so a set never has more than
/// one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    domain: Domain,
    members: RoaringBitmap,
    provenance: String,
}

impl Set {
    pub fn empty(domain: Domain, provenance: impl Into<String>) -> Self {
        Self {
            domain,
            members: RoaringBitmap::new(),
            provenance: provenance.into(),
        }
    }
    /// Builds a set from IDs, all of which must lie in the domain.
    pub fn from_ids<I>(domain: Domain, provenance: impl Into<String>, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut set = Self::empty(domain, provenance);
        for (position, id) in ids.into_iter().enumerate() {
            if !domain.contains(id) {
                return Err(FilesetsError::ValueOutOfRange {
                    origin: set.provenance,
                    line: position + 1,
                    value: id.to_string(),
                    max_id: domain.max_id(),
                });
            }
            set.members.insert(id);
        }
        Ok(set)
    }
    // Only reachable for ids already checked against the domain.
    pub(crate) fn from_bitmap(domain: Domain, provenance: String, members: RoaringBitmap) -> Self {
        Self {
            domain,
            members,
            provenance,
        }
    }
    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn provenance(&self) -> &str {
        &self.provenance
    }
    pub fn contains(&self, id: u32) -> bool {
        self.members.contains(id)
    }
    pub fn len(&self) -> u64 {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.members.iter()
    }
    pub fn ids(&self) -> Vec<u32> {
        self.members.iter().collect()
    }

    pub fn union(mut self, other: Set) -> Result<Set> {
        self.check_domain(&other)?;
        self.members |= &other.members;
        Ok(self.record_binary(Operator::Union, other))
    }
    pub fn intersect(mut self, other: Set) -> Result<Set> {
        self.check_domain(&other)?;
        self.members &= &other.members;
        Ok(self.record_binary(Operator::Intersect, other))
    }
    /// Members of `self` that are not in `other`.
    pub fn difference(mut self, other: Set) -> Result<Set> {
        self.check_domain(&other)?;
        self.members -= &other.members;
        Ok(self.record_binary(Operator::Difference, other))
    }
    /// Complement relative to the whole domain.
    pub fn invert(mut self) -> Set {
        let mut complement = RoaringBitmap::new();
        complement.insert_range(1..=self.domain.max_id());
        complement -= &self.members;
        self.members = complement;
        self.provenance = format!("( {} {} )", Operator::Invert, self.provenance);
        debug!("{}", self.provenance);
        self
    }
    /// Applies a binary operator, consuming both operands.
    pub fn combine(self, operator: Operator, other: Set) -> Result<Set> {
        match operator {
            Operator::Union => self.union(other),
            Operator::Intersect => self.intersect(other),
            Operator::Difference => self.difference(other),
            Operator::Invert => Err(FilesetsError::Invariant(format!(
                "{} is not a binary operator",
                operator
            ))),
        }
    }

    // sets over different domains cannot be combined
    fn check_domain(&self, other: &Set) -> Result<()> {
        if self.domain != other.domain {
            return Err(FilesetsError::Invariant(format!(
                "{} is over {} but {} is over {}",
                self.provenance, self.domain, other.provenance, other.domain
            )));
        }
        Ok(())
    }
    fn record_binary(mut self, operator: Operator, other: Set) -> Set {
        self.provenance = format!("( {} {} {} )", self.provenance, operator, other.provenance);
        debug!("{}", self.provenance);
        self
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {{", self.provenance)?;
        for (i, id) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        write!(f, "}}")
    }
}
