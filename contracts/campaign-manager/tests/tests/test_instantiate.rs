use super::helpers::MockEnv;

#[test]
fn owner_set_on_instantiate() {
    let mock = MockEnv::new().build().unwrap();

    let owner = mock.query_owner();
    assert_eq!(owner.owner, Some(mock.owner.to_string()));
    assert_eq!(owner.proposed, None);
}
