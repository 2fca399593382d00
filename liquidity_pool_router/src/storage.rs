use crate::storage_types::DataKey;
use paste::paste;
use soroban_sdk::{panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{generate_instance_storage_getter, generate_instance_storage_setter};

generate_instance_storage_getter!(factory, DataKey::Factory, Address);
generate_instance_storage_setter!(factory, DataKey::Factory, Address);
