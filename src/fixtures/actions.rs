//! Action Fixtures

use serde::Deserialize;

/// Wrapper for a scripted list of actions in YAML
#[derive(Debug, Deserialize)]
pub struct ActionsFixture {
    /// Actions in dispatch order
    pub actions: Vec<ActionFixture>,
}

/// Action Fixture
#[derive(Debug, Deserialize)]
pub struct ActionFixture {
    /// Action type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Catalogue key of the product carried by the action
    #[serde(default)]
    pub product: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn actions_fixture_parses_yaml() -> TestResult {
        let yaml = "actions:\n  - type: ADD_TO_CART\n    product: mug\n  - type: CLEAR\n";

        let fixture: ActionsFixture = serde_norway::from_str(yaml)?;

        assert_eq!(fixture.actions.len(), 2);
        assert_eq!(fixture.actions.first().map(|a| a.kind.as_str()), Some("ADD_TO_CART"));
        assert_eq!(fixture.actions.get(1).and_then(|a| a.product.as_deref()), None);

        Ok(())
    }
}
