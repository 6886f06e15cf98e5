use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::datasource::SampleApi;
use crate::meeting::{Meeting, MeetingFilter};
use crate::repository::MeetingRepository;

#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(about = "Meeting room scheduler", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List the sample meetings, optionally narrowed by day or room
    List(ListCliArgs),
    /// Print the known meeting rooms
    Rooms,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ListCliArgs {
    /// Only show meetings on this day (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
    /// Only show meetings in this room
    #[arg(short, long)]
    pub room: Option<String>,
}

/// Print the (filtered) sample meeting list.
///
/// The store is in-memory only, so offline commands always act on a freshly
/// seeded repository.
pub fn handle_list_command(args: ListCliArgs) -> Result<()> {
    let repository = MeetingRepository::new(&SampleApi::default());
    let filter = MeetingFilter {
        date: args.date,
        room: args.room,
    };

    let meetings = repository.filtered(&filter);
    if meetings.is_empty() {
        println!("No meetings match.");
        return Ok(());
    }

    for meeting in &meetings {
        println!("{}", format_meeting_line(meeting));
    }
    println!(
        "{} meeting(s){}",
        meetings.len(),
        if filter.has_criteria() {
            " matching the filter"
        } else {
            ""
        }
    );

    Ok(())
}

pub fn handle_rooms_command() -> Result<()> {
    let repository = MeetingRepository::new(&SampleApi::default());
    for room in repository.room_names().iter() {
        println!("{room}");
    }
    Ok(())
}

fn format_meeting_line(meeting: &Meeting) -> String {
    format!(
        "{}  {:<6} {} — {} ({} participant(s))",
        meeting.date_time.format("%d/%m/%Y %H:%M"),
        meeting.location,
        meeting.title,
        meeting.subject,
        meeting.participants.len(),
    )
}
