//! Canned assistant content.

pub const GREETING: &str = "Hello! I'm your AI financial assistant. I can help you with budgeting, \
expense tracking, savings goals, and financial advice. What would you like to know?";

pub const QUICK_QUESTIONS: [&str; 5] = [
    "How much did I spend on food last month?",
    "What are my savings goals?",
    "Give me budget suggestions",
    "Show my expense categories",
    "Help me reduce spending",
];

pub const DEFAULT_REPLIES: [&str; 5] = [
    "Based on your spending patterns, I recommend setting aside 20% of your income for savings. \
Would you like me to help you create a budget plan?",
    "I can see you've been spending quite a bit on dining out this month. Consider meal prepping \
to save money while still enjoying good food!",
    "Your emergency fund goal is looking great! You're 65% of the way there. At your current \
saving rate, you'll reach your target in about 2 months.",
    "I notice some recurring subscriptions in your expenses. Let me help you identify which ones \
you might not be using actively.",
    "Great question! For your vacation fund, I suggest creating a separate savings goal and \
setting up automatic transfers of ₹5,000 monthly.",
];

pub fn default_replies() -> Vec<String> {
    DEFAULT_REPLIES.iter().map(|reply| reply.to_string()).collect()
}
