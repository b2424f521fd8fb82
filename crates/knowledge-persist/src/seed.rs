//! Sample data loaded at start-up so the dashboard has something to show.

use chrono::{Duration, Utc};
use serde_json::json;

use knowledge_types::{
    BillingStatus, ConversationMessage, FileType, GraphEdge, GraphNode, NewAIModel,
    NewBillingRecord, NewConversation, NewFile, NewKnowledgeGraph, NewTemplate, NewUser,
    NewVectorDatabase, NewWorkspace, Plan, UserRole,
};

use crate::error::Result;
use crate::memory::Tables;

pub(crate) fn populate(tables: &mut Tables) -> Result<()> {
    let now = Utc::now();

    // Users
    let sarah = tables.insert_user(
        NewUser::new("sarahchen", "Sarah Chen")
            .with_avatar("https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80")
            .with_email("sarah@example.com")
            .with_bio("AI researcher and enthusiast")
            .with_role(UserRole::Admin)
            .with_plan(Plan::Premium)
            .with_usage_tokens(5000)
            .with_preferences(json!({ "theme": "dark", "notifications": true })),
    )?;
    let michael = tables.insert_user(
        NewUser::new("michaelscott", "Michael Scott")
            .with_avatar("https://images.unsplash.com/photo-1519244703995-f4e0f30006d5?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80")
            .with_email("michael@example.com")
            .with_bio("Business professional exploring AI")
            .with_role(UserRole::User)
            .with_plan(Plan::Free)
            .with_usage_tokens(1000)
            .with_preferences(json!({ "theme": "light", "notifications": false })),
    )?;

    // Workspaces
    let ethics = tables.insert_workspace(
        NewWorkspace::new("AI Ethics Research", sarah.id)
            .with_description("Research on ethical considerations in AI development and deployment")
            .with_color(0)
            .with_project_type(0)
            .with_stats(3, 24)
            .with_last_modified(now - Duration::hours(2))
            .private(false)
            .with_collaborator(michael.id),
    );
    tables.insert_workspace(
        NewWorkspace::new("ML Course Notes", sarah.id)
            .with_description("Notes and resources for the machine learning course")
            .with_color(1)
            .with_project_type(1)
            .with_stats(2, 17)
            .with_last_modified(now - Duration::days(1))
            .private(true),
    );
    tables.insert_workspace(
        NewWorkspace::new("Product Requirements", michael.id)
            .with_description("Product requirements and specifications for the AI assistant")
            .with_color(2)
            .with_project_type(2)
            .with_stats(5, 36)
            .with_last_modified(now - Duration::days(3))
            .private(false)
            .with_collaborator(sarah.id),
    );

    // Files, all under the first workspace
    tables.insert_file(
        NewFile::new("AI Ethics Framework.pdf", FileType::Pdf, ethics.id)
            .with_size(1.2)
            .uploaded_at(now - Duration::days(3))
            .active(true),
    );
    tables.insert_file(
        NewFile::new("Ethics Panel Discussion", FileType::Youtube, ethics.id)
            .with_size(0.0)
            .with_duration("14:32")
            .uploaded_at(now - Duration::days(4))
            .active(false),
    );
    tables.insert_file(
        NewFile::new("Interview Transcripts.docx", FileType::Docx, ethics.id)
            .with_size(0.54)
            .uploaded_at(now - Duration::days(5))
            .active(false),
    );

    // AI models
    let gpt = tables.insert_model(
        NewAIModel::new("GPT-4o", "OpenAI", "ri-openai-fill", "green").active(true),
    );
    for (name, provider, icon, color) in [
        ("Gemini Pro", "Google", "ri-google-fill", "blue"),
        ("Llama 3", "Meta", "ri-meta-fill", "purple"),
        ("Claude 3", "Anthropic", "ri-ai-generate", "orange"),
        ("Ollama (Local)", "Local", "ri-code-box-line", "gray"),
    ] {
        tables.insert_model(NewAIModel::new(name, provider, icon, color).active(false));
    }

    // Templates
    for (name, description, icon, color) in [
        ("Research Summary", "Analyze and extract key points from academic papers", "ri-file-text-line", "blue"),
        ("Concept Map", "Visualize connections between ideas and topics", "ri-mind-map", "purple"),
        ("Video Notes", "Extract and organize key points from video content", "ri-youtube-line", "red"),
        ("Study Guide", "Create organized study materials with flashcards", "ri-book-2-line", "green"),
    ] {
        tables.insert_template(NewTemplate::new(name, description, icon, color));
    }

    // Knowledge graphs
    tables.insert_knowledge_graph(
        NewKnowledgeGraph::new("AI Ethics Relationships", ethics.id, sarah.id)
            .with_description("Graph showing relationships between key AI ethics concepts")
            .with_nodes(vec![
                GraphNode::new("1", "Ethics", "50%", "30%", "#4285F4"),
                GraphNode::new("2", "Fairness", "30%", "50%", "#EA4335"),
                GraphNode::new("3", "Transparency", "70%", "50%", "#FBBC05"),
                GraphNode::new("4", "Accountability", "40%", "70%", "#34A853"),
                GraphNode::new("5", "Privacy", "60%", "70%", "#8E24AA"),
            ])
            .with_edges(vec![
                GraphEdge::new("1", "2"),
                GraphEdge::new("1", "3"),
                GraphEdge::new("2", "4"),
                GraphEdge::new("3", "5"),
                GraphEdge::new("4", "5"),
            ]),
    );

    // Vector databases
    tables.insert_vector_database(
        NewVectorDatabase::new("Research Papers", "Pinecone", sarah.id)
            .with_description("Vector database for research papers and academic content")
            .with_settings(json!({ "dimensions": 1536, "metric": "cosine" }))
            .with_vector_count(1250),
    );
    tables.insert_vector_database(
        NewVectorDatabase::new("Course Materials", "Chroma", sarah.id)
            .with_description("Vector database for course materials and lecture notes")
            .with_settings(json!({ "dimensions": 768, "metric": "cosine" }))
            .with_vector_count(865),
    );

    // Conversations
    let two_days_ago = now - Duration::days(2);
    let yesterday = now - Duration::days(1);
    tables.insert_conversation(
        NewConversation::new("AI Ethics Discussion", gpt.id, sarah.id).with_messages(vec![
            ConversationMessage::user("What are the key principles of AI ethics?", two_days_ago),
            ConversationMessage::assistant(
                "The key principles of AI ethics include fairness, transparency, privacy, accountability, and safety. These principles guide the development and deployment of AI systems to ensure they benefit humanity.",
                two_days_ago,
            ),
            ConversationMessage::user("How can we ensure fairness in AI systems?", yesterday),
            ConversationMessage::assistant(
                "Ensuring fairness in AI systems involves diverse training data, regular bias testing, interdisciplinary teams, clear documentation, and ongoing monitoring after deployment.",
                yesterday,
            ),
        ]),
    );

    // Billing
    tables.insert_billing_record(
        NewBillingRecord::new(sarah.id, 19.99, "Premium Plan Subscription - Monthly", BillingStatus::Paid)
            .with_invoice("INV-2024-05001"),
    );
    tables.insert_billing_record(
        NewBillingRecord::new(sarah.id, 4.50, "API Usage - 1000 tokens", BillingStatus::Paid)
            .with_invoice("INV-2024-05002"),
    );

    tracing::info!(
        users = tables.users.len(),
        workspaces = tables.workspaces.len(),
        files = tables.files.len(),
        "Loaded sample data"
    );

    Ok(())
}

/// Ids of well-known seeded records
pub mod ids {
    use knowledge_types::{ModelId, UserId, WorkspaceId};

    pub const SARAH: UserId = UserId(1);
    pub const MICHAEL: UserId = UserId(2);
    pub const AI_ETHICS_WORKSPACE: WorkspaceId = WorkspaceId(1);
    pub const ACTIVE_MODEL: ModelId = ModelId(1);
}
