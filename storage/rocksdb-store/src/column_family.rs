use appreg_state_space::StateSpace;
use rocksdb::{ColumnFamilyDescriptor, Options};

use crate::config::Config;

pub(crate) fn cf_name(state_space: StateSpace) -> &'static str {
    match state_space {
        StateSpace::AppLen => "app_len",
        StateSpace::App => "app",
        StateSpace::ParamLen => "param_len",
        StateSpace::Param => "param",
    }
}

pub(crate) fn descriptors<C: Config>() -> Vec<ColumnFamilyDescriptor> {
    let registry_cfs = StateSpace::ALL.into_iter().map(|state_space| {
        ColumnFamilyDescriptor::new(cf_name(state_space), C::cf_opts(state_space))
    });

    std::iter::once(ColumnFamilyDescriptor::new("default", Options::default()))
        .chain(registry_cfs)
        .collect()
}
