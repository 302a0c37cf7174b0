use chrono::NaiveDate;

/// A journal entry. Read-only: sourced from static content, never
/// written through the API.
#[derive(Debug, Clone)]
pub struct JournalPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub category: &'static str,
    pub image: &'static str,
    /// Body HTML as delivered by the content source.
    pub body: &'static str,
}

impl JournalPost {
    pub fn excerpt(&self) -> String {
        excerpt(self.body, 160)
    }

    pub fn read_time(&self) -> String {
        read_time(self.body)
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

pub fn journal_posts() -> Vec<JournalPost> {
    vec![
        JournalPost {
            slug: "creative-process-exploration",
            title: "Exploring the Creative Process",
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            category: "Process",
            image: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?w=800&q=80",
            body: "<p>A deep dive into my artistic journey and the methods I use to bring \
                   ideas to life. Every project begins the same way: a blank page, a loose \
                   constraint, and a long walk.</p>\
                   <p>Over the years I have learned to trust the uncomfortable middle phase, \
                   where nothing looks right yet. The sketches from that stage almost never \
                   survive, but the decisions they force always do. This post walks through \
                   a recent identity project from first thumbnail to final artwork.</p>",
        },
        JournalPost {
            slug: "color-theory-in-practice",
            title: "Color Theory in Practice",
            date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            category: "Theory",
            image: "https://images.unsplash.com/photo-1541701494587-cb58502866ab?w=800&q=80",
            body: "<p>How I use color psychology and theory to create emotional impact in my \
                   work. Black and gold became my signature palette almost by accident, after \
                   a packaging commission where everything else felt wrong.</p>\
                   <p>The pairing works because it is both restrained and loud: gold carries \
                   warmth and weight, black gives it room to breathe. Here I break down three \
                   pieces and the palette decisions behind each.</p>",
        },
        JournalPost {
            slug: "studio-setup-2024",
            title: "My Studio Setup 2024",
            date: NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            category: "Behind the Scenes",
            image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
            body: "<p>A tour of my creative space and the tools that help me create. The \
                   desk faces a wall, not a window, which surprises visitors but keeps the \
                   work in front of me instead of the weather.</p>",
        },
        JournalPost {
            slug: "inspiration-sources",
            title: "Where I Find Inspiration",
            date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            category: "Inspiration",
            image: "https://images.unsplash.com/photo-1456086272160-b28b0645b729?w=800&q=80",
            body: "<p>The books, artists, and experiences that fuel my creative work. A \
                   running list of the exhibitions, printed matter, and conversations I keep \
                   coming back to when a brief refuses to move.</p>",
        },
        JournalPost {
            slug: "collaboration-journey",
            title: "The Art of Collaboration",
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            category: "Reflection",
            image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800&q=80",
            body: "<p>Lessons learned from working with other creatives and clients. The \
                   best projects in this portfolio were shaped as much by disagreement as by \
                   alignment, and that took me years to appreciate.</p>",
        },
        JournalPost {
            slug: "digital-vs-traditional",
            title: "Digital vs Traditional Media",
            date: NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
            category: "Technique",
            image: "https://images.unsplash.com/photo-1561998338-13ad7883b20f?w=800&q=80",
            body: "<p>Exploring the unique qualities and challenges of both approaches. I \
                   still start most work on paper, and this post explains why the friction \
                   of physical media earns its place in a digital workflow.</p>",
        },
    ]
}

pub fn find_post(slug: &str) -> Option<JournalPost> {
    journal_posts().into_iter().find(|p| p.slug == slug)
}

/// Removes markup, leaving plain text with single spaces.
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain-text excerpt truncated at a word boundary.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = strip_html(html);
    if text.chars().count() <= max_chars {
        return text;
    }

    let mut cut = String::new();
    for word in text.split_whitespace() {
        if cut.chars().count() + word.chars().count() + 1 > max_chars {
            break;
        }
        if !cut.is_empty() {
            cut.push(' ');
        }
        cut.push_str(word);
    }
    cut.push('…');
    cut
}

/// Reading time at 200 words per minute, rounded up, never below one
/// minute.
pub fn read_time(html: &str) -> String {
    let words = strip_html(html).split_whitespace().count();
    let minutes = words.div_ceil(200).max(1);
    format!("{minutes} min read")
}

/// Long-format date, e.g. "March 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
