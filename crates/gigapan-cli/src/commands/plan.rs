use anyhow::Result;
use clap::Args;
use gigapan_core::scan::shot_count;
use gigapan_core::step::StepPlan;

use super::input::SpecArgs;
use crate::summary::print_plan_summary;

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
}

pub fn run(args: &PlanArgs) -> Result<()> {
    let spec = args.spec.resolve()?;
    let plan = StepPlan::from_spec(&spec);
    let shots = shot_count(&spec)?;

    print_plan_summary(&spec, &plan, shots);

    Ok(())
}
