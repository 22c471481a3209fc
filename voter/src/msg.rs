use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// Labels voters can choose from (e.g. ["coffee", "tea", "kombucha"])
    pub options: Vec<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Vote for the option at `option` (index into the option list). Once per wallet.
    Vote { option: u32 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the option labels in instantiation order
    #[returns(OptionsResponse)]
    Options {},
    /// Returns the tally for every option, aligned with `Options`
    #[returns(VotesResponse)]
    Votes {},
    /// Returns whether `voter` has voted, and for which option
    #[returns(HasVotedResponse)]
    HasVoted { voter: String },
}

#[cw_serde]
pub struct OptionsResponse {
    pub options: Vec<String>,
}

#[cw_serde]
pub struct VotesResponse {
    pub votes: Vec<u64>,
}

#[cw_serde]
pub struct HasVotedResponse {
    pub voted: bool,
    pub option: Option<u32>,
}
