use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsUnit {
    Microwatt,
    Milliwatt,
    Watt,
    Other(char),
}

impl AbsUnit {
    pub fn from_tag(tag: char) -> Self {
        match tag {
            'u' => AbsUnit::Microwatt,
            'm' => AbsUnit::Milliwatt,
            'w' => AbsUnit::Watt,
            other => AbsUnit::Other(other),
        }
    }

    pub fn tag(&self) -> char {
        match self {
            AbsUnit::Microwatt => 'u',
            AbsUnit::Milliwatt => 'm',
            AbsUnit::Watt => 'w',
            AbsUnit::Other(tag) => *tag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub dbm: f32,
    pub abs_level: f32,
    pub abs_unit: AbsUnit,
    pub time: OffsetDateTime,
}

#[derive(Debug, Clone, Copy)]
pub struct StatsSummary {
    pub min_dbm: f32,
    pub max_dbm: f32,
    pub avg_dbm: f32,
}
