pub const BRAND: &str = "Brightside";

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub perks: &'static [&'static str],
    pub featured: bool,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Fast Setup",
        body: "Go from sign-up to a live workspace in minutes, with sensible defaults out of the box.",
    },
    Feature {
        icon: "🔒",
        title: "Secure by Default",
        body: "Encryption at rest and in transit, single sign-on and audit logs on every plan.",
    },
    Feature {
        icon: "📈",
        title: "Built to Scale",
        body: "Start with a handful of users and grow to thousands without changing a thing.",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Basic Plan",
        price: "$9",
        period: "/month",
        perks: &["Up to 5 users", "10 GB storage", "Email support"],
        featured: false,
    },
    Product {
        name: "Pro Plan",
        price: "$29",
        period: "/month",
        perks: &["Up to 50 users", "100 GB storage", "Priority support", "Advanced analytics"],
        featured: true,
    },
    Product {
        name: "Enterprise Plan",
        price: "$99",
        period: "/month",
        perks: &["Unlimited users", "1 TB storage", "Dedicated manager", "Custom integrations"],
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "We moved the whole team over in an afternoon. Nobody has asked to go back.",
        author: "Maria Jensen",
        role: "Operations Lead",
    },
    Testimonial {
        quote: "The Pro plan paid for itself in the first month.",
        author: "Daniel Okafor",
        role: "Founder",
    },
    Testimonial {
        quote: "Support actually answers, and they know the product.",
        author: "Priya Raman",
        role: "IT Manager",
    },
];
