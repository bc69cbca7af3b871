use clap::{Args, Parser, Subcommand};
use rolo::filter::CategoryFilter;
use rolo::form::ContactPatch;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Command-line contact book synced to a REST backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Contact field flags shared by `add` and `edit`. For `edit`, flags left
/// out keep the contact's current values.
#[derive(Args, Debug, Default)]
pub struct ContactFields {
    /// Full name (letters and spaces)
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// 10-digit phone number starting with 6-9
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    /// 5 or 6 digit zip code
    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Facebook profile URL
    #[arg(long)]
    pub facebook: Option<String>,

    /// Twitter profile URL
    #[arg(long)]
    pub twitter: Option<String>,

    /// Instagram profile URL
    #[arg(long)]
    pub instagram: Option<String>,

    /// LinkedIn profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// WhatsApp link (e.g. https://wa.me/...)
    #[arg(long)]
    pub whatsapp: Option<String>,

    /// Birthday (YYYY-MM-DD)
    #[arg(long)]
    pub birthday: Option<String>,

    /// One of: me, friend, family, colleague, client, other
    #[arg(short, long)]
    pub relationship: Option<String>,

    /// Free-form notes (max 500 characters)
    #[arg(long)]
    pub notes: Option<String>,
}

impl ContactFields {
    pub fn into_patch(self) -> ContactPatch {
        ContactPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            facebook: self.facebook,
            twitter: self.twitter,
            instagram: self.instagram,
            linkedin: self.linkedin,
            whatsapp: self.whatsapp,
            birthday: self.birthday,
            relationship: self.relationship,
            notes: self.notes,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    #[command(alias = "ls")]
    List {
        /// Filter by relationship category, or "all"
        #[arg(short, long, default_value = "all")]
        category: CategoryFilter,

        /// Free-text search over name, email and phone
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a new contact
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: ContactFields,
    },

    /// Show a contact's full record
    #[command(alias = "v")]
    View {
        /// Id of the contact
        id: String,
    },

    /// Edit an existing contact
    #[command(alias = "e")]
    Edit {
        /// Id of the contact
        id: String,

        #[command(flatten)]
        fields: ContactFields,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete {
        /// Id of the contact
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., api-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
