//! CLI tool for deploying and interacting with the GoldChain lending contracts.

use goldchain_contracts::lending::pool::{LendingPool, LendingPoolInitArgs};
use goldchain_contracts::oracle::PriceOracle;
use goldchain_contracts::payment::CollateralVault;
use goldchain_contracts::token::VGoldToken;
use odra::host::{HostEnv, NoArgs};
use odra::prelude::Addressable;
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the vGold token contract.
pub struct VGoldTokenDeployScript;

impl DeployScript for VGoldTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let _token = VGoldToken::load_or_deploy(
            &env,
            NoArgs,
            container,
            300_000_000_000, // Gas limit for token deployment
        )?;

        Ok(())
    }
}

/// Deploys the collateral vault contract.
pub struct CollateralVaultDeployScript;

impl DeployScript for CollateralVaultDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let _vault = CollateralVault::load_or_deploy(&env, NoArgs, container, 300_000_000_000)?;

        Ok(())
    }
}

/// Deploys the price oracle contract.
pub struct PriceOracleDeployScript;

impl DeployScript for PriceOracleDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let _oracle = PriceOracle::load_or_deploy(&env, NoArgs, container, 300_000_000_000)?;

        Ok(())
    }
}

/// Deploys the full stack: token, vault, oracle, then the lending pool
/// wired to them, with the pool set as token minter and vault operator.
pub struct LendingDeployScript;

impl DeployScript for LendingDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let mut token = VGoldToken::load_or_deploy(&env, NoArgs, container, 300_000_000_000)?;
        let mut vault = CollateralVault::load_or_deploy(&env, NoArgs, container, 300_000_000_000)?;
        let oracle = PriceOracle::load_or_deploy(&env, NoArgs, container, 300_000_000_000)?;

        let pool = LendingPool::load_or_deploy(
            &env,
            LendingPoolInitArgs {
                vgold_token: token.address(),
                collateral_vault: vault.address(),
                price_oracle: oracle.address(),
            },
            container,
            500_000_000_000, // Gas limit for pool deployment
        )?;

        env.set_gas(50_000_000_000);
        token.set_minter(pool.address());
        vault.set_operator(pool.address());

        Ok(())
    }
}

/// Scenario to read the pool aggregates.
pub struct PoolStatsScenario;

impl Scenario for PoolStatsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let pool = container.contract_ref::<LendingPool>(env)?;
        let (total_lent, total_borrowed, total_collateral) = pool.get_pool_stats();

        println!("Total lent:       {total_lent}");
        println!("Total borrowed:   {total_borrowed}");
        println!("Total collateral: {total_collateral}");
        Ok(())
    }
}

impl ScenarioMetadata for PoolStatsScenario {
    const NAME: &'static str = "pool-stats";
    const DESCRIPTION: &'static str = "Prints the lending pool aggregates";
}

/// Scenario to update the minimum collateral ratio.
pub struct SetCollateralRatioScenario;

impl Scenario for SetCollateralRatioScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "new_ratio",
            "New minimum collateral ratio in percent (>= 110)",
            NamedCLType::U64,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut pool = container.contract_ref::<LendingPool>(env)?;
        let new_ratio = args.get_single::<u64>("new_ratio")?;

        env.set_gas(50_000_000_000);
        pool.try_set_collateral_ratio(new_ratio)?;

        println!("Collateral ratio updated to {new_ratio}%");
        Ok(())
    }
}

impl ScenarioMetadata for SetCollateralRatioScenario {
    const NAME: &'static str = "set-collateral-ratio";
    const DESCRIPTION: &'static str = "Updates the pool's minimum collateral ratio";
}

/// Scenario to push a gold price update.
pub struct UpdatePriceScenario;

impl Scenario for UpdatePriceScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "price",
            "New gold price in micro base units per vGold unit",
            NamedCLType::U64,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut oracle = container.contract_ref::<PriceOracle>(env)?;
        let price = args.get_single::<u64>("price")?;

        env.set_gas(50_000_000_000);
        oracle.try_update_price(price)?;

        println!("Gold price updated to {price}");
        Ok(())
    }
}

impl ScenarioMetadata for UpdatePriceScenario {
    const NAME: &'static str = "update-price";
    const DESCRIPTION: &'static str = "Pushes a new gold price to the oracle";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for GoldChain lending smart contracts")
        // Deploy scripts
        .deploy(VGoldTokenDeployScript)
        .deploy(CollateralVaultDeployScript)
        .deploy(PriceOracleDeployScript)
        .deploy(LendingDeployScript)
        // Contract references
        .contract::<VGoldToken>()
        .contract::<CollateralVault>()
        .contract::<PriceOracle>()
        .contract::<LendingPool>()
        // Scenarios
        .scenario(PoolStatsScenario)
        .scenario(SetCollateralRatioScenario)
        .scenario(UpdatePriceScenario)
        .build()
        .run();
}
