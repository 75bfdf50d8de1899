
mod test_execute_collateral;
mod test_instantiate;
mod test_register_user;
