#![cfg(test)]
extern crate std;

use crate::{LiquidityPoolRouter, LiquidityPoolRouterClient};
use soroban_liquidity_pool_contract as pool_contract;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};
use soroban_token_contract::testutils::create_token;
use soroban_token_contract::TokenClient;

// In-memory stand-in for the pool registry. Pools are registered natively
// by the test and staged per sorted pair; `create_pool` initializes the
// staged contract on first use, exactly when the router asks for it.
#[derive(Clone)]
#[contracttype]
enum FactoryDataKey {
    Pool(Address, Address),
    Staged(Address, Address),
}

#[contract]
pub struct TestPoolFactory;

#[contractimpl]
impl TestPoolFactory {
    pub fn stage_pool(e: Env, token_a: Address, token_b: Address, pool: Address) {
        e.storage()
            .instance()
            .set(&FactoryDataKey::Staged(token_a, token_b), &pool);
    }

    pub fn has_pool(e: Env, token_a: Address, token_b: Address) -> bool {
        e.storage()
            .instance()
            .has(&FactoryDataKey::Pool(token_a, token_b))
    }

    pub fn get_pool(e: Env, token_a: Address, token_b: Address) -> Address {
        e.storage()
            .instance()
            .get(&FactoryDataKey::Pool(token_a, token_b))
            .unwrap()
    }

    pub fn create_pool(e: Env, token_a: Address, token_b: Address) -> Address {
        let staged: Address = e
            .storage()
            .instance()
            .get(&FactoryDataKey::Staged(token_a.clone(), token_b.clone()))
            .unwrap();
        pool_contract::LiquidityPoolClient::new(&e, &staged).initialize(
            &Vec::from_array(&e, [token_a.clone(), token_b.clone()]),
            &30,
        );
        e.storage()
            .instance()
            .set(&FactoryDataKey::Pool(token_a, token_b), &staged);
        staged
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) e: Env,
    pub(crate) admin: Address,
    pub(crate) user: Address,
    pub(crate) router: LiquidityPoolRouterClient<'a>,
    pub(crate) factory: TestPoolFactoryClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let e = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&e);
        let user = Address::generate(&e);

        let router =
            LiquidityPoolRouterClient::new(&e, &e.register(LiquidityPoolRouter {}, ()));
        router.init_admin(&admin);

        let factory = TestPoolFactoryClient::new(&e, &e.register(TestPoolFactory {}, ()));
        router.set_factory(&factory.address);

        Setup {
            e,
            admin,
            user,
            router,
            factory,
        }
    }
}

impl Setup<'_> {
    // Creates a funded test token. `transfer_fee` of 100 models a 1%
    // deflationary asset.
    pub(crate) fn token<'a>(&self, transfer_fee: u32, mint: i128) -> TokenClient<'a> {
        let token = create_token(&self.e, &self.admin, transfer_fee);
        token.mint(&self.user, &mint);
        token
    }

    // Registers an empty pool contract and stages it with the factory so
    // the router can "create" it on first deposit.
    pub(crate) fn stage_pool(&self, token_a: &Address, token_b: &Address) -> Address {
        let pool = self.e.register(pool_contract::LiquidityPool {}, ());
        let (a, b) = if token_a < token_b {
            (token_a.clone(), token_b.clone())
        } else {
            (token_b.clone(), token_a.clone())
        };
        self.factory.stage_pool(&a, &b, &pool);
        pool
    }

    pub(crate) fn add_liquidity(
        &self,
        token_a: &Address,
        token_b: &Address,
        amount_a: u128,
        amount_b: u128,
    ) -> (u128, u128, u128) {
        self.router.add_liquidity(
            &self.user,
            token_a,
            token_b,
            &amount_a,
            &amount_b,
            &0,
            &0,
            &self.user,
            &self.deadline(),
        )
    }

    pub(crate) fn deadline(&self) -> u64 {
        self.e.ledger().timestamp() + 100
    }
}
