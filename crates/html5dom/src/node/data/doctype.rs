#[derive(Clone, Debug, Default, PartialEq)]
/// Data structure for the synthesized document type node
pub struct DocTypeData {
    pub name: String,
    pub pub_identifier: String,
    pub sys_identifier: String,
}

impl DocTypeData {
    #[must_use]
    pub fn new(name: &str, pub_identifier: &str, sys_identifier: &str) -> Self {
        Self {
            name: name.to_owned(),
            pub_identifier: pub_identifier.to_owned(),
            sys_identifier: sys_identifier.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pub_identifier(&self) -> &str {
        &self.pub_identifier
    }

    pub fn sys_identifier(&self) -> &str {
        &self.sys_identifier
    }
}
