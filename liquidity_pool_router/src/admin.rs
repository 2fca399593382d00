use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};
use utils::bump::bump_instance;

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

pub fn require_admin(e: &Env) {
    if !has_admin(e) {
        panic!("admin not set")
    }
    let admin = get_admin(e);
    admin.require_auth();
}
