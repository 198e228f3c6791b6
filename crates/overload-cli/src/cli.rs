//! Plan command definitions and their handlers.
//!
//! Argument structs carry clap derives and convert into the core parameter
//! types from `overload_core::params`, so the core never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Plan Builder / Plan Cache
//! ```
//!
//! [`Cli`] is the terminal's consumer view. It reads everything through the
//! shared [`PlanCache`] and sends every write through it too; it holds no
//! plan state of its own.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use overload_core::{
    catalog::{self, CATALOG},
    display::{CreateResult, DayEntry, DeleteResult, OperationStatus, PlanList, UpdateResult, WithUnit},
    models::{DayKey, PlanId},
    params::{CreatePlan, DayAssignment, DeletePlan, EditPlan, ExerciseAssignment, Id},
    PlanCache, WeightUnit,
};

use crate::renderer::TerminalRenderer;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// List all plans, marking the active one
    #[command(alias = "ls")]
    List,
    /// Show a plan by id
    Show(ShowPlanArgs),
    /// Show the active plan
    Active,
    /// Create a plan; days without a workout are rest days
    Create(CreatePlanArgs),
    /// Edit the named days of a saved plan
    Edit(EditPlanArgs),
    /// Make a plan the active plan on the server
    Activate(ActivatePlanArgs),
    /// Delete a plan
    #[command(alias = "rm")]
    Delete(DeletePlanArgs),
}

/// Show a plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// Plan id
    pub id: PlanId,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Activate a plan
#[derive(Args)]
pub struct ActivatePlanArgs {
    /// Plan id
    pub id: PlanId,
}

impl From<ActivatePlanArgs> for Id {
    fn from(val: ActivatePlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Create a new plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,

    /// Workout day as DAY=NAME, e.g. wed="Push Day". Repeatable
    #[arg(short, long = "workout", value_name = "DAY=NAME")]
    pub workouts: Vec<DayAssignment>,

    /// Exercise as DAY=EXERCISE[:SETS], e.g. "wed=Bench Press:10x95w,8x135".
    /// Repeatable; exercises keep the order given
    #[arg(short, long = "exercise", value_name = "DAY=EXERCISE[:SETS]")]
    pub exercises: Vec<ExerciseAssignment>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            workouts: val.workouts,
            exercises: val.exercises,
        }
    }
}

/// Edit a saved plan
#[derive(Args)]
pub struct EditPlanArgs {
    /// Plan id
    pub id: PlanId,

    /// New plan name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Turn a day into a rest day. Repeatable
    #[arg(long, value_name = "DAY")]
    pub rest: Vec<DayKey>,

    /// Replace a day with a workout as DAY=NAME. Repeatable
    #[arg(short, long = "workout", value_name = "DAY=NAME")]
    pub workouts: Vec<DayAssignment>,

    /// Replace a day's exercises, given as DAY=EXERCISE[:SETS]. Repeatable
    #[arg(short, long = "exercise", value_name = "DAY=EXERCISE[:SETS]")]
    pub exercises: Vec<ExerciseAssignment>,
}

impl From<EditPlanArgs> for EditPlan {
    fn from(val: EditPlanArgs) -> Self {
        EditPlan {
            id: val.id,
            name: val.name,
            rest: val.rest,
            workouts: val.workouts,
            exercises: val.exercises,
        }
    }
}

/// Delete a plan
#[derive(Args)]
pub struct DeletePlanArgs {
    /// Plan id
    pub id: PlanId,

    /// Confirm the deletion
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Terminal handler for plan commands.
pub struct Cli {
    cache: Arc<PlanCache>,
    renderer: TerminalRenderer,
    unit: WeightUnit,
}

impl Cli {
    pub fn new(cache: Arc<PlanCache>, renderer: TerminalRenderer, unit: WeightUnit) -> Self {
        Self {
            cache,
            renderer,
            unit,
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Active => self.show_active().await,
            PlanCommands::Create(args) => self.create_plan(&args.into()).await,
            PlanCommands::Edit(args) => self.edit_plan(&args.into()).await,
            PlanCommands::Activate(args) => self.activate_plan(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        tokio::join!(self.cache.ensure_all(), self.cache.ensure_active());
        let state = self.cache.snapshot();
        let list = PlanList::new(state.all_plans().to_vec())
            .with_active(state.active_plan().map(|plan| plan.id));

        let mut output = String::from("# Week Plans\n\n");
        output.push_str(&list.to_string());
        self.renderer.render(&output)
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .cache
            .fetch_plan(params.id)
            .await
            .with_context(|| format!("Failed to fetch plan {}", params.id))?;
        match plan {
            Some(plan) => self.renderer.render(&WithUnit(&plan, self.unit).to_string()),
            None => bail!("Plan with ID {} not found", params.id),
        }
    }

    async fn show_active(&self) -> Result<()> {
        self.cache.ensure_active().await;
        match self.cache.active_plan() {
            Some(plan) => self.renderer.render(&WithUnit(&plan, self.unit).to_string()),
            None => self.renderer.render("No active plan.\n"),
        }
    }

    pub async fn show_today(&self, day: Option<DayKey>) -> Result<()> {
        let day = day.unwrap_or_else(DayKey::today);
        self.cache.ensure_active().await;

        let Some(plan) = self.cache.active_plan() else {
            return self.renderer.render("No active plan.\n");
        };
        let mut output = format!("# {}\n\n", plan.name);
        output.push_str(&DayEntry::new(&plan, day).with_unit(self.unit).to_string());
        self.renderer.render(&output)
    }

    async fn create_plan(&self, params: &CreatePlan) -> Result<()> {
        let draft = params.to_draft()?;
        let plan = self
            .cache
            .save_plan(&draft)
            .await
            .context("Failed to create plan")?;
        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    async fn edit_plan(&self, params: &EditPlan) -> Result<()> {
        if !params.has_changes() {
            bail!("Nothing to change for plan {}", params.id);
        }
        let Some(plan) = self
            .cache
            .fetch_plan(params.id)
            .await
            .with_context(|| format!("Failed to fetch plan {}", params.id))?
        else {
            bail!("Plan with ID {} not found", params.id);
        };

        let (draft, changes) = params.apply(&plan)?;
        let saved = self
            .cache
            .save_plan(&draft)
            .await
            .context("Failed to update plan")?;
        self.renderer
            .render(&UpdateResult::with_changes(saved, changes).to_string())
    }

    async fn activate_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .cache
            .activate_plan(params.id)
            .await
            .with_context(|| format!("Failed to activate plan {}", params.id))?;
        let status = OperationStatus::success(format!(
            "Plan '{}' (ID: {}) is now active",
            plan.name, plan.id
        ));
        self.renderer.render(&status.to_string())
    }

    async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        if params.validate().is_err() {
            bail!(
                "Deleting plan {} cannot be undone. Pass --confirm to proceed",
                params.id
            );
        }

        self.cache.ensure_all().await;
        let known = self.cache.snapshot().plan(params.id).cloned();
        self.cache
            .delete_plan(params.id)
            .await
            .with_context(|| format!("Failed to delete plan {}", params.id))?;

        let output = match known {
            Some(plan) => DeleteResult::new(plan).to_string(),
            None => DeleteResult::new(params.id).to_string(),
        };
        self.renderer.render(&output)
    }
}

/// Renders the catalog level addressed by the given path.
pub fn catalog_markdown(
    body_part: Option<&str>,
    region: Option<&str>,
    equipment: Option<&str>,
) -> Result<String> {
    debug!("Catalog lookup: {body_part:?} / {region:?} / {equipment:?}");
    let mut output = String::new();

    let Some(body_part) = body_part else {
        output.push_str("# Exercise Catalog\n\n");
        for part in CATALOG {
            let regions: Vec<&str> = part.regions.iter().map(|region| region.name).collect();
            output.push_str(&format!("- **{}**: {}\n", part.name, regions.join(", ")));
        }
        return Ok(output);
    };
    let part = catalog::body_part(body_part)
        .with_context(|| format!("Unknown body part '{body_part}'"))?;

    let Some(region) = region else {
        output.push_str(&format!("# {}\n\n", part.name));
        for region in part.regions {
            output.push_str(&format!("## {}\n\n", region.name));
            for group in region.equipment {
                output.push_str(&format!("- **{}**: {}\n", group.name, group.exercises.join(", ")));
            }
            output.push('\n');
        }
        return Ok(output);
    };
    let found = part
        .region(region)
        .with_context(|| format!("Unknown region '{region}' for {}", part.name))?;

    match equipment {
        None => {
            output.push_str(&format!("# {} / {}\n\n", part.name, found.name));
            for group in found.equipment {
                output.push_str(&format!("- **{}**: {}\n", group.name, group.exercises.join(", ")));
            }
        }
        Some(equipment) => {
            let group = found
                .equipment(equipment)
                .with_context(|| format!("Unknown equipment '{equipment}' for {}", found.name))?;
            output.push_str(&format!("# {} / {} / {}\n\n", part.name, found.name, group.name));
            for exercise in group.exercises {
                output.push_str(&format!("- {exercise}\n"));
            }
        }
    }
    Ok(output)
}
