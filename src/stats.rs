use crate::observability::labels::Labels;
use metrics::counter;

const TABLE: &str = "table";

/// The static registries a lookup can miss in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupTable {
    Bank,
    Operator,
    Province,
    IssuancePlace,
}

impl LookupTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupTable::Bank => "bank",
            LookupTable::Operator => "operator",
            LookupTable::Province => "province",
            LookupTable::IssuancePlace => "issuance_place",
        }
    }
}

// Counters are resolved at the call site so a recorder installed after the
// first call still sees them.
pub fn record_lookup_miss(table: LookupTable) {
    counter!("lookup.miss", Labels::new(&[(TABLE, table.as_str())])).increment(1);
}

pub fn record_national_id_generation_attempt() {
    counter!("national_id.generation_attempts").increment(1);
}
