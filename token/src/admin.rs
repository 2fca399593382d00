use soroban_sdk::{contracttype, Address, Env};
use utils::bump::bump_instance;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Admin,
}

pub fn has_admin(e: &Env) -> bool {
    bump_instance(e);
    e.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(e: &Env) -> Address {
    bump_instance(e);
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(e: &Env, admin: &Address) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::Admin, admin)
}
