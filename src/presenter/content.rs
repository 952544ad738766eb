//! Static text and links shown in the actions region

/// An external tool the user can reach instead of downloading here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalTool {
    pub name: &'static str,
    pub url: &'static str,
}

/// One bullet inside a solution group; `detail` is rendered after the label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionItem {
    pub label: &'static str,
    pub detail: Option<&'static str>,
}

/// A category of alternatives in the fallback panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionGroup {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: &'static [SolutionItem],
}

pub const DOWNLOAD_NOTE_HEADING: &str = "Download Options:";

pub const DOWNLOAD_NOTE: &str = "FetchFlicks only looks up video information. It does not \
     download or save videos itself.";

pub const ALTERNATIVE_OPTIONS: [&str; 4] = [
    "Use a dedicated desktop downloader (recommended)",
    "Install a browser extension like \"Video DownloadHelper\"",
    "Use online tools like yt-dlp or youtube-dl",
    "Try services like SaveFrom.net or Y2Mate",
];

pub const EXTERNAL_TOOLS: [ExternalTool; 3] = [
    ExternalTool {
        name: "yt-dlp (Command Line Tool)",
        url: "https://github.com/yt-dlp/yt-dlp",
    },
    ExternalTool {
        name: "SaveFrom.net",
        url: "https://savefrom.net/",
    },
    ExternalTool {
        name: "Y2Mate",
        url: "https://www.y2mate.com/",
    },
];

pub const FALLBACK_HEADING: &str = "Recommended Solutions for Video Downloading:";

const fn item(label: &'static str, detail: Option<&'static str>) -> SolutionItem {
    SolutionItem { label, detail }
}

pub const SOLUTION_GROUPS: [SolutionGroup; 4] = [
    SolutionGroup {
        title: "1. Deploy on Free Cloud Hosting",
        summary: "Deploy the server application on free cloud platforms:",
        items: &[
            item("Vercel", Some("Free hosting with Python support")),
            item("Railway", Some("Free tier for small applications")),
            item("Render", Some("Free web service hosting")),
            item("PythonAnywhere", Some("Free Python hosting")),
        ],
    },
    SolutionGroup {
        title: "2. Browser Extensions",
        summary: "Use browser extensions for video downloading:",
        items: &[
            item("Video DownloadHelper (Firefox/Chrome)", None),
            item("Flash Video Downloader (Chrome)", None),
            item("Video Downloader Plus (Chrome)", None),
        ],
    },
    SolutionGroup {
        title: "3. Desktop Applications",
        summary: "Install desktop software for video downloading:",
        items: &[
            item("yt-dlp", Some("Command-line tool (most powerful)")),
            item("4K Video Downloader", Some("GUI application")),
            item("JDownloader", Some("Multi-platform downloader")),
        ],
    },
    SolutionGroup {
        title: "4. Online Services",
        summary: "Use trusted online video downloaders:",
        items: &[
            item("SaveFrom.net", None),
            item("Y2Mate.com", None),
            item("KeepVid.com", None),
        ],
    },
];
