/// The keyspaces that make up the registry state.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StateSpace {
    /// `account` -> number of application entries
    AppLen,
    /// `account || app_index` -> application record
    App,
    /// `account || app_index` -> number of parameter entries
    ParamLen,
    /// `account || app_index || param_index` -> parameter entry
    Param,
}

impl StateSpace {
    pub const ALL: [StateSpace; 4] =
        [StateSpace::AppLen, StateSpace::App, StateSpace::ParamLen, StateSpace::Param];
}
