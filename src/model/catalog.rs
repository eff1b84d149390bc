//! Static agency content: blog posts, projects, pricing tiers, FAQ entries, testimonials

use chrono::NaiveDate;

use super::filter::{CategoryTab, ContentItem};

/// A blog article
#[derive(Clone, Debug)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// ISO date (`YYYY-MM-DD`)
    pub published: &'static str,
    pub read_minutes: u8,
    pub author: &'static str,
    pub featured: bool,
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// e.g. "Mar 8, 2025"; falls back to the raw string if it doesn't parse
    pub fn display_date(&self) -> String {
        self.published_on()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.published.to_string())
    }
}

impl ContentItem for BlogPost {
    fn id(&self) -> &str {
        self.slug
    }
    fn title(&self) -> &str {
        self.title
    }
    fn description(&self) -> &str {
        self.description
    }
    fn category(&self) -> &str {
        self.category
    }
}

/// A portfolio project
#[derive(Clone, Debug)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

impl ContentItem for Project {
    fn id(&self) -> &str {
        self.slug
    }
    fn title(&self) -> &str {
        self.title
    }
    fn description(&self) -> &str {
        self.description
    }
    fn category(&self) -> &str {
        self.category
    }
}

/// A line on a pricing card
#[derive(Clone, Copy, Debug)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

/// A pricing package
#[derive(Clone, Debug)]
pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// "Popular" or "Standard"; drives the tab filter
    pub category: &'static str,
    pub one_time_fee: u32,
    pub support_fee: u32,
    pub delivery: &'static str,
    pub features: &'static [PlanFeature],
    /// Included features flattened into one string so search can see them
    pub search_text: &'static str,
}

impl PricingTier {
    pub fn is_popular(&self) -> bool {
        self.category == "Popular"
    }
}

impl ContentItem for PricingTier {
    fn id(&self) -> &str {
        self.id
    }
    fn title(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.search_text
    }
    fn category(&self) -> &str {
        self.category
    }
}

/// A question/answer pair
#[derive(Clone, Debug)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

impl ContentItem for FaqEntry {
    fn id(&self) -> &str {
        self.id
    }
    fn title(&self) -> &str {
        self.question
    }
    fn description(&self) -> &str {
        self.answer
    }
    fn category(&self) -> &str {
        self.category
    }
}

#[derive(Clone, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// Up to three other posts from the same category, in catalog order
pub fn related_posts(post: &BlogPost) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|other| other.category == post.category && other.slug != post.slug)
        .take(3)
        .collect()
}

pub fn blog_tabs() -> Vec<CategoryTab> {
    vec![
        CategoryTab::all("All"),
        CategoryTab::new("Technology", "Technology"),
        CategoryTab::new("Development", "Development"),
        CategoryTab::new("Design", "Design"),
        CategoryTab::new("AI & Technology", "AI & Technology"),
        CategoryTab::new("Accessibility", "Accessibility"),
    ]
}

pub fn project_tabs() -> Vec<CategoryTab> {
    vec![
        CategoryTab::all("All Projects"),
        CategoryTab::new("web", "Web Development"),
        CategoryTab::new("ecommerce", "E-commerce"),
        CategoryTab::new("mobile", "Mobile Apps"),
        CategoryTab::new("saas", "SaaS"),
    ]
}

pub fn pricing_tabs() -> Vec<CategoryTab> {
    vec![
        CategoryTab::all("All Plans"),
        CategoryTab::new("Popular", "Most Popular"),
        CategoryTab::new("Standard", "Standard"),
    ]
}

pub fn faq_tabs() -> Vec<CategoryTab> {
    vec![
        CategoryTab::all("All"),
        CategoryTab::new("process", "Process"),
        CategoryTab::new("pricing", "Pricing"),
        CategoryTab::new("technical", "Technical"),
        CategoryTab::new("maintenance", "Maintenance"),
        CategoryTab::new("content", "Content"),
        CategoryTab::new("benefits", "Benefits"),
        CategoryTab::new("support", "Support"),
    ]
}

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "modern-web-dev-trends-2025",
        title: "Modern Web Development Trends for 2025",
        description: "Explore the cutting-edge technologies and approaches that will shape web development in the coming year.",
        category: "Technology",
        published: "2025-03-08",
        read_minutes: 8,
        author: "Alex Morgan",
        featured: true,
    },
    BlogPost {
        slug: "react-vs-nextjs-comparison",
        title: "React vs Next.js: A Comprehensive Comparison",
        description: "Understand the key differences between React and Next.js to make informed decisions for your projects.",
        category: "Development",
        published: "2025-03-05",
        read_minutes: 12,
        author: "Sarah Johnson",
        featured: true,
    },
    BlogPost {
        slug: "ai-in-web-development",
        title: "The Impact of AI on Modern Web Development",
        description: "Discover how artificial intelligence is revolutionizing the way we build and interact with web applications.",
        category: "AI & Technology",
        published: "2025-02-28",
        read_minutes: 10,
        author: "Michael Chen",
        featured: false,
    },
    BlogPost {
        slug: "design-systems-guide",
        title: "Building Robust Design Systems: A Practical Guide",
        description: "Learn how to create and implement design systems that scale across products and teams.",
        category: "Design",
        published: "2025-02-20",
        read_minutes: 15,
        author: "Emma Wilson",
        featured: false,
    },
    BlogPost {
        slug: "typescript-best-practices",
        title: "TypeScript Best Practices for Large-Scale Applications",
        description: "Discover proven patterns and approaches for managing complex TypeScript codebases.",
        category: "Development",
        published: "2025-02-15",
        read_minutes: 11,
        author: "James Roberts",
        featured: false,
    },
    BlogPost {
        slug: "accessibility-web-development",
        title: "Making Web Accessibility a Priority: Techniques and Tools",
        description: "Explore practical approaches to building inclusive web experiences for all users.",
        category: "Accessibility",
        published: "2025-02-10",
        read_minutes: 9,
        author: "Priya Sharma",
        featured: false,
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "saas-dashboard",
        title: "SaaS Dashboard",
        description: "Modern analytics dashboard for a SaaS platform",
        category: "web",
        tags: &["React", "Next.js", "Tailwind"],
    },
    Project {
        slug: "ecommerce-platform",
        title: "E-commerce Platform",
        description: "Full-featured online store with payment processing",
        category: "ecommerce",
        tags: &["Next.js", "Stripe", "MongoDB"],
    },
    Project {
        slug: "restaurant-website",
        title: "Restaurant Website",
        description: "Interactive website for a high-end restaurant",
        category: "web",
        tags: &["React", "Framer Motion", "GSAP"],
    },
    Project {
        slug: "fitness-app",
        title: "Fitness App",
        description: "Mobile application for workout tracking and nutrition",
        category: "mobile",
        tags: &["React Native", "Firebase", "Redux"],
    },
    Project {
        slug: "real-estate-platform",
        title: "Real Estate Platform",
        description: "Property listing and search platform with map integration",
        category: "web",
        tags: &["Next.js", "Mapbox", "Prisma"],
    },
    Project {
        slug: "crypto-dashboard",
        title: "Crypto Dashboard",
        description: "Real-time cryptocurrency tracking and portfolio management",
        category: "web",
        tags: &["React", "D3.js", "WebSockets"],
    },
    Project {
        slug: "travel-booking-app",
        title: "Travel Booking App",
        description: "Cross-platform travel booking and itinerary management app",
        category: "mobile",
        tags: &["Flutter", "Node.js", "GraphQL"],
    },
    Project {
        slug: "fashion-store",
        title: "Fashion Store",
        description: "Custom Shopify storefront for a fashion brand",
        category: "ecommerce",
        tags: &["Shopify", "Next.js", "Tailwind"],
    },
    Project {
        slug: "productivity-tool",
        title: "Productivity Tool",
        description: "Project management and team collaboration platform",
        category: "saas",
        tags: &["React", "Firebase", "TypeScript"],
    },
];

const fn included(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: true }
}

const fn excluded(text: &'static str) -> PlanFeature {
    PlanFeature { text, included: false }
}

pub static PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        id: "basic",
        name: "Starter",
        description: "Perfect for small businesses just getting started online",
        category: "Standard",
        one_time_fee: 999,
        support_fee: 49,
        delivery: "7-14 days",
        features: &[
            included("5-Page Responsive Website"),
            included("Mobile Optimization"),
            included("Basic SEO Setup"),
            included("Contact Form"),
            included("Google Maps Integration"),
            included("Social Media Links"),
            excluded("Content Management System"),
            excluded("E-commerce Functionality"),
            excluded("Custom Animations"),
        ],
        search_text: "Perfect for small businesses just getting started online. 5-Page Responsive Website, Mobile Optimization, Basic SEO Setup, Contact Form, Google Maps Integration, Social Media Links",
    },
    PricingTier {
        id: "standard",
        name: "Professional",
        description: "Our most popular package for established businesses",
        category: "Popular",
        one_time_fee: 1999,
        support_fee: 89,
        delivery: "14-21 days",
        features: &[
            included("10-Page Responsive Website"),
            included("Mobile Optimization"),
            included("Advanced SEO Setup"),
            included("Contact Form & Booking System"),
            included("Google Maps Integration"),
            included("Social Media Integration"),
            included("Content Management System"),
            included("Basic Analytics Dashboard"),
            excluded("E-commerce Functionality"),
        ],
        search_text: "Our most popular package for established businesses. 10-Page Responsive Website, Mobile Optimization, Advanced SEO Setup, Contact Form & Booking System, Google Maps Integration, Social Media Integration, Content Management System, Basic Analytics Dashboard",
    },
    PricingTier {
        id: "premium",
        name: "Enterprise",
        description: "For businesses that need advanced features and e-commerce",
        category: "Standard",
        one_time_fee: 3999,
        support_fee: 149,
        delivery: "21-28 days",
        features: &[
            included("Unlimited Pages"),
            included("Mobile Optimization"),
            included("Comprehensive SEO Strategy"),
            included("Advanced Contact & Booking"),
            included("Google Maps & Integration"),
            included("Social Media Integration & Feed"),
            included("Advanced CMS with Training"),
            included("E-commerce Functionality"),
            included("Custom Animations & Effects"),
        ],
        search_text: "For businesses that need advanced features and e-commerce. Unlimited Pages, Mobile Optimization, Comprehensive SEO Strategy, Advanced Contact & Booking, Google Maps & Integration, Social Media Integration & Feed, Advanced CMS with Training, E-commerce Functionality, Custom Animations & Effects",
    },
];

pub static FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        id: "build-time",
        question: "How long does it take to build a business website?",
        answer: "Most of our business websites are completed within 2 weeks from the time we receive your content and approval on the design. Our streamlined process ensures you get a professional website quickly without sacrificing quality.",
        category: "process",
    },
    FaqEntry {
        id: "monthly-price",
        question: "What's included in the monthly price?",
        answer: "Our monthly fee includes website hosting, routine maintenance, security updates, SSL certificate, basic content updates, and technical support. This ensures your website remains secure, up-to-date, and functioning optimally at all times.",
        category: "pricing",
    },
    FaqEntry {
        id: "mobile",
        question: "Will my website work on mobile phones and tablets?",
        answer: "Absolutely! All our websites are fully responsive, meaning they automatically adjust to look and function perfectly on any device - smartphones, tablets, laptops, and desktop computers. Mobile optimization is a standard feature in all our packages.",
        category: "technical",
    },
    FaqEntry {
        id: "self-update",
        question: "Can I update the website myself?",
        answer: "Yes! We build our websites on user-friendly content management systems that allow you to easily make basic updates yourself. We also provide training to ensure you're comfortable with managing your site. For more complex changes, our support team is always available to help.",
        category: "maintenance",
    },
    FaqEntry {
        id: "content-help",
        question: "Do you help with website content and images?",
        answer: "We offer content development services to help craft compelling website copy and can source high-quality stock images for your site. We can also enhance and optimize any existing content and images you provide to ensure they look their best online.",
        category: "content",
    },
    FaqEntry {
        id: "growth",
        question: "How will a website help my business grow?",
        answer: "A professional website increases your credibility, expands your reach to potential customers searching online, showcases your products/services 24/7, generates leads through contact forms, improves customer engagement, and provides valuable analytics about your audience.",
        category: "benefits",
    },
    FaqEntry {
        id: "seo",
        question: "Will my website be optimized for search engines (SEO)?",
        answer: "Yes, all our websites include basic SEO setup to help you rank better in search results. This includes proper site structure, fast loading times, mobile optimization, meta tags, schema markup, and XML sitemaps. We also offer advanced SEO packages for businesses looking to maximize their online visibility.",
        category: "technical",
    },
    FaqEntry {
        id: "after-launch",
        question: "What happens if I need help after my website launches?",
        answer: "Our support doesn't end at launch. Your monthly fee includes ongoing technical support for any issues that may arise. We're just an email or phone call away if you need assistance with your website.",
        category: "support",
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Our new website has completely transformed our business. Within the first month, our leads increased by 150% and we've been able to convert these leads at a much higher rate than before.",
        author: "Sarah Johnson",
        role: "Owner, Mountain View Dental",
        rating: 5,
    },
    Testimonial {
        quote: "The team delivered exactly what we needed - a beautiful, user-friendly website that actually drives sales. Our online orders have doubled since the new site launched, and customers constantly compliment our website.",
        author: "Michael Chen",
        role: "Founder, Artisan Bakery",
        rating: 5,
    },
    Testimonial {
        quote: "In our industry, establishing trust is crucial. Our new website does exactly that with its professional design and easy-to-navigate structure. Client inquiries have increased by 87% since launch.",
        author: "David Rodriguez",
        role: "Principal, Summit Financial Advisors",
        rating: 5,
    },
    Testimonial {
        quote: "The redesign of our website has made our landscaping business stand out from competitors. The investment paid for itself in just 3 weeks with the increase in new project requests we've received.",
        author: "Emma Thompson",
        role: "CEO, Green Thumb Landscaping",
        rating: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<T: ContentItem>(items: &[T]) {
        let ids: HashSet<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_ids_unique_per_collection() {
        assert_unique_ids(BLOG_POSTS);
        assert_unique_ids(PROJECTS);
        assert_unique_ids(PRICING_TIERS);
        assert_unique_ids(FAQ_ENTRIES);
    }

    #[test]
    fn test_every_item_category_has_a_tab() {
        fn check<T: ContentItem>(items: &[T], tabs: Vec<CategoryTab>) {
            for item in items {
                assert!(
                    tabs.iter().any(|t| t.filter.is_specific(item.category())),
                    "no tab for {}",
                    item.category()
                );
            }
        }
        check(BLOG_POSTS, blog_tabs());
        check(PROJECTS, project_tabs());
        check(PRICING_TIERS, pricing_tabs());
        check(FAQ_ENTRIES, faq_tabs());
    }

    #[test]
    fn test_blog_dates_parse() {
        for post in BLOG_POSTS {
            assert!(post.published_on().is_some(), "{}", post.slug);
        }
        assert_eq!(BLOG_POSTS[0].display_date(), "Mar 8, 2025");
    }

    #[test]
    fn test_related_posts_share_category_and_skip_self() {
        for post in BLOG_POSTS {
            let related = related_posts(post);
            assert!(related.len() <= 3);
            for other in &related {
                assert_eq!(other.category, post.category);
                assert_ne!(other.slug, post.slug);
            }
            let expected = BLOG_POSTS
                .iter()
                .filter(|o| o.category == post.category && o.slug != post.slug)
                .count()
                .min(3);
            assert_eq!(related.len(), expected, "{}", post.slug);
        }

        let react = find_post("react-vs-nextjs-comparison").unwrap();
        let slugs: Vec<&str> = related_posts(react).iter().map(|p| p.slug).collect();
        assert_eq!(slugs, ["typescript-best-practices"]);
    }

    #[test]
    fn test_find_post_by_slug() {
        assert_eq!(find_post(BLOG_POSTS[0].slug).map(|p| p.title), Some(BLOG_POSTS[0].title));
        assert!(find_post("no-such-post").is_none());
    }

    #[test]
    fn test_single_popular_tier() {
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.is_popular()).count(), 1);
    }
}
