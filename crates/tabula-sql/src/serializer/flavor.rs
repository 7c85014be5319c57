use super::{Resolve, Serializer};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
}

impl<'a> Serializer<'a> {
    pub fn sqlite(resolver: &'a dyn Resolve) -> Serializer<'a> {
        Serializer {
            resolver,
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql(resolver: &'a dyn Resolve) -> Serializer<'a> {
        Serializer {
            resolver,
            flavor: Flavor::Postgresql,
        }
    }
}
