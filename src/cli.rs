use carelink_core::{models::session::Role, pagination::PageQuery};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "carelink")]
#[command(author, version, about = "CareLink healthcare booking client")]
pub struct Cli {
    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    User,
    Provider,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Provider => Role::ServiceProvider,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub limit: u32,
}

impl From<PageArgs> for PageQuery {
    fn from(args: PageArgs) -> Self {
        PageQuery::new(args.page, args.limit)
    }
}

#[derive(Subcommand)]
pub enum Command {
    #[command(flatten)]
    Account(AccountCommand),
    /// Patient screens
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Service provider screens
    Provider {
        #[command(subcommand)]
        action: ProviderAction,
    },
    /// Admin screens
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Create a user or provider account; an OTP is emailed
    Register {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Verify the emailed code and sign in
    VerifyOtp {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        code: String,
    },
    /// Email a new verification code
    ResendOtp {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        email: String,
    },
    Login {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout {
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    /// Show which roles are signed in
    Whoami,
}

#[derive(Debug, Clone, Default, Args)]
pub struct UserProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    pub address: Option<String>,
}

#[derive(Subcommand)]
pub enum UserAction {
    Profile,
    UpdateProfile(UserProfileArgs),
    /// Browse approved providers
    Providers {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        search: Option<String>,
    },
    /// Search providers as you would type into the search box
    Search {
        /// Successive inputs; only the last one is sent
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    Provider {
        id: String,
    },
    /// A provider's schedule
    Slots {
        provider_id: String,
    },
    Reviews {
        provider_id: String,
    },
    /// Reserve a schedule entry and print the payment link
    Book {
        provider_id: String,
        schedule_id: String,
    },
    Bookings {
        #[command(flatten)]
        page: PageArgs,
    },
    Booking {
        id: String,
    },
    Cancel {
        id: String,
        #[arg(long)]
        reason: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the video call hand-off for a booking
    Call {
        id: String,
    },
    Review {
        booking_id: String,
        /// 1 to 5
        #[arg(long)]
        rating: u8,
        #[arg(long, default_value = "")]
        comment: String,
    },
    Complain {
        booking_id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        description: String,
    },
    Complaints,
    Categories,
    Blogs {
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProviderProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub about: Option<String>,
    #[arg(long)]
    pub fee: Option<Decimal>,
}

#[derive(Subcommand)]
pub enum ProviderAction {
    Profile,
    UpdateProfile(ProviderProfileArgs),
    /// Submit professional details for admin approval
    Details {
        #[arg(long)]
        specialization: String,
        #[arg(long)]
        qualification: String,
        #[arg(long)]
        experience_years: u32,
        #[arg(long)]
        category: String,
        #[arg(long)]
        about: String,
        #[arg(long)]
        fee: Decimal,
    },
    Categories,
    Slots,
    /// Publish a schedule entry (times are UTC)
    AddSlot {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        from: NaiveTime,
        #[arg(long)]
        to: NaiveTime,
        /// Comma separated
        #[arg(long, default_value = "")]
        services: String,
    },
    DeleteSlot {
        schedule_id: String,
    },
    Bookings {
        #[command(flatten)]
        page: PageArgs,
    },
    Complete {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Call {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Reviews,
    Dashboard,
}

#[derive(Subcommand)]
pub enum AdminAction {
    Users {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        search: Option<String>,
    },
    BlockUser {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    UnblockUser {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Providers {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        search: Option<String>,
    },
    BlockProvider {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    UnblockProvider {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Approve {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Categories {
        #[command(flatten)]
        page: PageArgs,
    },
    AddCategory {
        #[arg(long)]
        name: String,
        /// Comma separated sub-categories
        #[arg(long, default_value = "")]
        tags: String,
    },
    EditCategory {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        tags: String,
        #[command(flatten)]
        page: PageArgs,
    },
    ListCategory {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    UnlistCategory {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Blogs {
        #[command(flatten)]
        page: PageArgs,
    },
    AddBlog {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    EditBlog {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        image: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    ListBlog {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    UnlistBlog {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Bookings {
        #[command(flatten)]
        page: PageArgs,
    },
    Refund {
        id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Complaints {
        #[command(flatten)]
        page: PageArgs,
    },
    Resolve {
        id: String,
        #[arg(long)]
        response: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Dashboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_scoped_commands_parse() {
        let cli = Cli::try_parse_from([
            "carelink", "--yes", "admin", "unlist-category", "c1", "--page", "3",
        ])
        .unwrap();

        assert!(cli.yes);
        match cli.command {
            Command::Admin {
                action: AdminAction::UnlistCategory { id, page },
            } => {
                assert_eq!(id, "c1");
                assert_eq!(PageQuery::from(page), PageQuery::new(3, 10));
            }
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_account_commands_sit_at_the_top_level() {
        let cli = Cli::try_parse_from([
            "carelink", "verify-otp", "--role", "provider", "--email", "rao@example.com", "--code", "4821",
        ])
        .unwrap();

        match cli.command {
            Command::Account(AccountCommand::VerifyOtp { role, code, .. }) => {
                assert_eq!(Role::from(role), Role::ServiceProvider);
                assert_eq!(code, "4821");
            }
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_slot_times_and_price_are_typed() {
        let cli = Cli::try_parse_from([
            "carelink", "provider", "add-slot", "--date", "2030-01-15", "--title", "Consultation",
            "--price", "450.50", "--from", "09:00", "--to", "09:30",
        ])
        .unwrap();

        match cli.command {
            Command::Provider {
                action: ProviderAction::AddSlot { price, from, services, .. },
            } => {
                assert_eq!(price, Decimal::new(45050, 2));
                assert_eq!(from, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
                assert_eq!(services, "");
            }
            _ => panic!("parsed into the wrong command"),
        }
    }

    #[test]
    fn test_malformed_values_are_refused_by_the_parser() {
        assert!(Cli::try_parse_from(["carelink", "login", "--role", "nurse", "--email", "a", "--password", "b"]).is_err());
        assert!(Cli::try_parse_from(["carelink", "provider", "add-slot", "--date", "15/01/2030"]).is_err());
    }
}
