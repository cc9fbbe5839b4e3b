use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use finch_core::{
    Category, FinancialGoal, GoalStatus, Transaction, TransactionKind, categorize,
    goal_completed_achievement, health_score_for, large_expense_tip,
};

mod seed;
mod state;

#[derive(Parser, Debug)]
#[command(name = "finch", version, about = "Personal finance tracker CLI")]
struct Cli {
    /// User whose ledger to operate on
    #[arg(long, global = true, default_value = "default")]
    user: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record and manage transactions
    Tx {
        #[command(subcommand)]
        command: TxCommand,
    },

    /// Create and track savings goals
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Review generated insights
    Insights {
        #[command(subcommand)]
        command: InsightCommand,
    },

    /// Print balance, recent activity, category breakdown, and trend
    Dashboard,

    /// Print the financial health score
    Score,

    /// Ask the assistant a question about your finances
    Ask {
        /// Free-text question, e.g. "Can I afford a $200 purchase?"
        query: Vec<String>,
    },

    /// Preview the category a description would be filed under
    Categorize {
        description: String,
        amount: f64,
    },

    /// Install the demo dataset for this user (overwrites existing state)
    Seed,
}

#[derive(Subcommand, Debug)]
enum TxCommand {
    /// Add a transaction; category is guessed from the description
    /// unless --category is given
    Add {
        amount: f64,
        description: String,

        /// Category label (food, housing, ...); default: auto-categorize
        #[arg(long)]
        category: Option<String>,

        /// Transaction date (YYYY-MM-DD); default: today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
    },

    /// List all transactions, newest first
    List,

    /// Delete a transaction by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// Create a savings goal
    Add {
        name: String,
        target: f64,

        /// Deadline (YYYY-MM-DD)
        deadline: NaiveDate,

        /// Free-form grouping label
        #[arg(long, default_value = "savings")]
        category: String,
    },

    /// List goals with progress and status
    List,

    /// Add money toward a goal
    Contribute { id: String, amount: f64 },

    /// Delete a goal by id
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum InsightCommand {
    /// List insights, newest first
    List {
        /// Only show unread insights
        #[arg(long)]
        unread: bool,
    },

    /// Mark an insight as read
    Read { id: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    match cli.command {
        Command::Tx { command } => match command {
            TxCommand::Add {
                amount,
                description,
                category,
                date,
                income,
            } => add_transaction(&cli.user, amount, description, category, date, income, today)?,
            TxCommand::List => {
                let state = state::load_state(&cli.user)?;
                if state.transactions.is_empty() {
                    println!("No transactions yet. Add one with: finch tx add <amount> <description>");
                    return Ok(());
                }
                for txn in finch_core::recent(&state.transactions, state.transactions.len()) {
                    print_transaction(&txn);
                }
            }
            TxCommand::Remove { id } => {
                let mut state = state::load_state(&cli.user)?;
                let before = state.transactions.len();
                state.transactions.retain(|t| t.id != id);
                if state.transactions.len() == before {
                    bail!("no transaction with id {id}");
                }
                state::save_state(&cli.user, &state)?;
                println!("Transaction removed.");
            }
        },

        Command::Goal { command } => match command {
            GoalCommand::Add {
                name,
                target,
                deadline,
                category,
            } => {
                if target <= 0.0 {
                    bail!("target must be positive");
                }
                let mut state = state::load_state(&cli.user)?;
                let goal =
                    FinancialGoal::new(state::fresh_id(0), &name, target, 0.0, deadline, category);
                state.goals.push(goal);
                state::save_state(&cli.user, &state)?;
                println!("Goal \"{name}\" created.");
            }
            GoalCommand::List => {
                let state = state::load_state(&cli.user)?;
                if state.goals.is_empty() {
                    println!("No goals yet. Create one with: finch goal add <name> <target> <deadline>");
                    return Ok(());
                }
                for goal in &state.goals {
                    print_goal(goal, today);
                }
            }
            GoalCommand::Contribute { id, amount } => contribute(&cli.user, &id, amount, today)?,
            GoalCommand::Remove { id } => {
                let mut state = state::load_state(&cli.user)?;
                let before = state.goals.len();
                state.goals.retain(|g| g.id != id);
                if state.goals.len() == before {
                    bail!("no goal with id {id}");
                }
                state::save_state(&cli.user, &state)?;
                println!("Goal removed.");
            }
        },

        Command::Insights { command } => match command {
            InsightCommand::List { unread } => {
                let state = state::load_state(&cli.user)?;
                let shown: Vec<_> = state
                    .insights
                    .iter()
                    .filter(|i| !unread || !i.read)
                    .collect();
                if shown.is_empty() {
                    println!("No insights.");
                    return Ok(());
                }
                for insight in shown {
                    let marker = if insight.read { " " } else { "*" };
                    println!(
                        "{marker} [{}] {:?}: {}",
                        insight.date, insight.kind, insight.message
                    );
                    println!("    id: {}", insight.id);
                }
            }
            InsightCommand::Read { id } => {
                let mut state = state::load_state(&cli.user)?;
                let insight = state
                    .insights
                    .iter_mut()
                    .find(|i| i.id == id)
                    .with_context(|| format!("no insight with id {id}"))?;
                insight.read = true;
                state::save_state(&cli.user, &state)?;
                println!("Marked as read.");
            }
        },

        Command::Dashboard => dashboard(&cli.user, today)?,

        Command::Score => {
            let state = state::load_state(&cli.user)?;
            let report = health_score_for(&state.transactions, state.goals.len());
            println!("Financial health score: {}/100", report.score);
            println!("{}", report.message());
        }

        Command::Ask { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                bail!("ask needs a question, e.g.: finch ask can I afford a $200 purchase");
            }
            let state = state::load_state(&cli.user)?;
            println!("{}", finch_core::respond(&query, &state.transactions));
        }

        Command::Categorize {
            description,
            amount,
        } => {
            println!("{}", categorize(&description, amount));
        }

        Command::Seed => {
            state::save_state(&cli.user, &seed::demo_state())?;
            println!("Demo data installed for user \"{}\".", cli.user);
        }
    }

    Ok(())
}

fn add_transaction(
    user: &str,
    amount: f64,
    description: String,
    category: Option<String>,
    date: Option<NaiveDate>,
    income: bool,
    today: NaiveDate,
) -> Result<()> {
    if amount <= 0.0 {
        bail!("amount must be positive; use --income for income instead of a sign");
    }

    let category = match category {
        Some(label) => Category::from_label(&label)
            .with_context(|| format!("unknown category: {label}"))?,
        None => categorize(&description, amount),
    };
    let kind = if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let txn = Transaction::new(
        state::fresh_id(0),
        amount,
        description,
        category,
        date.unwrap_or(today),
        kind,
    );

    let mut state = state::load_state(user)?;

    println!(
        "{} of ${amount} was recorded ({category}).",
        if income { "Income" } else { "Expense" }
    );

    if let Some(tip) = large_expense_tip(&txn, state::fresh_id(1), today) {
        println!("Insight: {}", tip.message);
        state.insights.insert(0, tip);
    }

    state.transactions.insert(0, txn);
    state::save_state(user, &state)?;
    Ok(())
}

fn contribute(user: &str, id: &str, amount: f64, today: NaiveDate) -> Result<()> {
    if amount < 0.0 {
        bail!("contribution must be non-negative");
    }

    let mut state = state::load_state(user)?;
    let goal = state
        .goals
        .iter_mut()
        .find(|g| g.id == id)
        .with_context(|| format!("no goal with id {id}"))?;

    // Crossing check runs against the pre-contribution amounts so the
    // achievement fires once, not on every later top-up
    let achievement = goal_completed_achievement(goal, amount, state::fresh_id(1), today);
    goal.contribute(amount);

    println!("Added ${amount} to \"{}\".", goal.name);
    print_goal(goal, today);

    if let Some(insight) = achievement {
        println!("Insight: {}", insight.message);
        state.insights.insert(0, insight);
    }

    state::save_state(user, &state)?;
    Ok(())
}

fn dashboard(user: &str, today: NaiveDate) -> Result<()> {
    let state = state::load_state(user)?;
    let txns = &state.transactions;

    println!("# Dashboard\n");
    println!("Balance:  ${:.2}", finch_core::balance(txns));
    println!("Income:   ${:.2}", finch_core::income(txns));
    println!("Expenses: ${:.2}", finch_core::expenses(txns));

    println!("\n## Recent transactions\n");
    let recent = finch_core::recent(txns, finch_core::DEFAULT_RECENT_LIMIT);
    if recent.is_empty() {
        println!("(none)");
    }
    for txn in &recent {
        print_transaction(txn);
    }

    println!("\n## Spending by category\n");
    let spending = finch_core::category_spending(txns);
    if spending.is_empty() {
        println!("(no expenses)");
    }
    for entry in &spending {
        println!("{:<16} ${:.2}", entry.category.label(), entry.amount);
    }

    println!("\n## Last 6 months\n");
    for point in finch_core::monthly_spending(txns, today) {
        println!("{} ${:.2}", point.month, point.amount);
    }

    let report = health_score_for(txns, state.goals.len());
    println!("\nHealth score: {}/100", report.score);
    println!("{}", report.message());
    Ok(())
}

fn print_transaction(txn: &Transaction) {
    let sign = if txn.is_income() { "+" } else { "-" };
    println!(
        "{} {sign}${:<10.2} {:<16} {}  (id {})",
        txn.date,
        txn.amount,
        txn.category.label(),
        txn.description,
        txn.id
    );
}

fn print_goal(goal: &FinancialGoal, today: NaiveDate) {
    let status = match goal.status(today) {
        GoalStatus::Complete => "complete",
        GoalStatus::Overdue => "overdue",
        GoalStatus::AtRisk => "at-risk",
        GoalStatus::OnTrack => "on-track",
    };
    let days = goal.days_remaining(today);
    let deadline = if days < 0 {
        format!("{} days overdue", -days)
    } else {
        format!("{days} days left")
    };
    println!(
        "{:<20} ${:.2} / ${:.2}  {:>3.0}%  {deadline}  [{status}]  (id {})",
        goal.name,
        goal.current_amount,
        goal.target_amount,
        goal.display_progress(),
        goal.id
    );
}
