use forge_core::IdentityRecord;

/// Raw values of the access form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityForm {
    pub email: String,
    pub handle: String,
    pub token: String,
    pub consent: bool,
}

impl IdentityForm {
    pub fn record(&self) -> IdentityRecord {
        IdentityRecord::from_form(&self.email, &self.handle, &self.token)
    }
}
