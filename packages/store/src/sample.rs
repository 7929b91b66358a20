//! Fixed seed data for the fallback store.
//!
//! The same collections are returned by the remote store when a read fails, so
//! dashboards stay populated while the backend is unavailable.

use serde_json::{json, Value};

use crate::models::EntityKind;
use crate::record::{Filter, Record};

/// Fresh copy of the sample collection for `kind`.
pub fn records(kind: EntityKind) -> Vec<Record> {
    let rows = match kind {
        EntityKind::Client => clients(),
        EntityKind::Project => projects(),
        EntityKind::Task => tasks(),
        EntityKind::Invoice => invoices(),
        EntityKind::Service => services(),
        EntityKind::TeamMember => team_members(),
    };
    match rows {
        Value::Array(rows) => rows
            .into_iter()
            .filter_map(|row| match row {
                Value::Object(map) => Some(Record::from(map)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Sample collection for `kind`, narrowed by an optional filter.
pub fn filtered(kind: EntityKind, filter: Option<&Filter>) -> Vec<Record> {
    let mut rows = records(kind);
    if let Some(filter) = filter {
        rows.retain(|r| r.matches(filter));
    }
    rows
}

fn clients() -> Value {
    json!([
        { "id": "1", "name": "Rahul Sharma", "email": "rahul@techvision.in", "phone": "+91 98765 43210", "company": "TechVision Pvt Ltd", "domain_name": "techvision.in", "hosting_provider": "Hostinger", "project_type": "Business Website", "platform": "WordPress", "hosting_expiry": "2025-08-15", "ssl_expiry": "2025-08-15", "maintenance_plan": "Monthly", "total_contract_value": 45000, "paid_amount": 35000, "plan_type": "Premium" },
        { "id": "2", "name": "Priya Mehta", "email": "priya@shopkart.in", "phone": "+91 87654 32109", "company": "ShopKart India", "domain_name": "shopkart.in", "hosting_provider": "AWS", "project_type": "Ecommerce Website", "platform": "Shopify", "hosting_expiry": "2025-12-20", "ssl_expiry": "2025-10-10", "maintenance_plan": "Annual", "total_contract_value": 85000, "paid_amount": 85000, "plan_type": "Premium" },
        { "id": "3", "name": "Amit Kumar", "email": "amit@startuphub.com", "phone": "+91 76543 21098", "company": "StartupHub", "domain_name": "startuphub.com", "hosting_provider": "GoDaddy", "project_type": "Landing Page", "platform": "Custom", "hosting_expiry": "2026-01-30", "ssl_expiry": "2026-01-30", "maintenance_plan": "None", "total_contract_value": 15000, "paid_amount": 15000, "plan_type": "Basic" },
        { "id": "4", "name": "Sunita Patel", "email": "sunita@fashionhub.in", "phone": "+91 65432 10987", "company": "FashionHub", "domain_name": "fashionhub.in", "hosting_provider": "Bluehost", "project_type": "Ecommerce Website", "platform": "WooCommerce", "hosting_expiry": "2025-07-01", "ssl_expiry": "2025-07-01", "maintenance_plan": "Monthly", "total_contract_value": 65000, "paid_amount": 40000, "plan_type": "Custom" },
        { "id": "5", "name": "Vikram Singh", "email": "vikram@digitaledge.in", "phone": "+91 54321 09876", "company": "Digital Edge", "domain_name": "digitaledge.in", "hosting_provider": "SiteGround", "project_type": "Business Website", "platform": "WordPress", "hosting_expiry": "2025-09-15", "ssl_expiry": "2025-09-15", "maintenance_plan": "Monthly", "total_contract_value": 30000, "paid_amount": 15000, "plan_type": "Basic" }
    ])
}

fn projects() -> Value {
    json!([
        { "id": "1", "name": "TechVision Corporate Website", "client_id": "1", "client_name": "TechVision Pvt Ltd", "start_date": "2025-01-15", "deadline": "2025-03-15", "status": "Development", "assigned_team": "Arjun, Priya", "progress": 65 },
        { "id": "2", "name": "ShopKart Ecommerce Platform", "client_id": "2", "client_name": "ShopKart India", "start_date": "2025-02-01", "deadline": "2025-05-01", "status": "Testing", "assigned_team": "Dev Team", "progress": 85 },
        { "id": "3", "name": "StartupHub Landing Page", "client_id": "3", "client_name": "StartupHub", "start_date": "2025-03-01", "deadline": "2025-03-30", "status": "Live", "assigned_team": "Rahul", "progress": 100 },
        { "id": "4", "name": "FashionHub Store Redesign", "client_id": "4", "client_name": "FashionHub", "start_date": "2025-03-15", "deadline": "2025-06-15", "status": "Design", "assigned_team": "Design Team", "progress": 30 },
        { "id": "5", "name": "Digital Edge Business Site", "client_id": "5", "client_name": "Digital Edge", "start_date": "2025-04-01", "deadline": "2025-06-30", "status": "Planning", "assigned_team": "Unassigned", "progress": 10 }
    ])
}

fn tasks() -> Value {
    json!([
        { "id": "1", "project_id": "1", "title": "Homepage wireframe", "description": "Create wireframes for homepage layout", "status": "completed", "assignee": "Arjun", "priority": "high", "due_date": "2025-02-01" },
        { "id": "2", "project_id": "1", "title": "Header & navigation design", "description": "Design sticky header with dropdown", "status": "completed", "assignee": "Priya", "priority": "medium", "due_date": "2025-02-05" },
        { "id": "3", "project_id": "1", "title": "Homepage development", "description": "Build homepage in WordPress", "status": "development", "assignee": "Arjun", "priority": "high", "due_date": "2025-02-20" },
        { "id": "4", "project_id": "1", "title": "Contact form setup", "description": "Setup contact form with email notifications", "status": "todo", "assignee": "Arjun", "priority": "low", "due_date": "2025-03-01" },
        { "id": "5", "project_id": "1", "title": "Client review — Round 1", "description": "Send mockups to client for feedback", "status": "review", "assignee": "Admin", "priority": "medium", "due_date": "2025-02-25" },
        { "id": "6", "project_id": "1", "title": "SEO & analytics setup", "description": "Meta tags, sitemap, Google Analytics", "status": "todo", "assignee": "Priya", "priority": "medium", "due_date": "2025-03-10" },
        { "id": "7", "project_id": "1", "title": "Mobile responsive testing", "description": "Test across devices", "status": "testing", "assignee": "Rohit", "priority": "high", "due_date": "2025-03-05" }
    ])
}

fn invoices() -> Value {
    json!([
        { "id": "1", "invoice_number": "INV-2025-001", "client_id": "1", "client_name": "TechVision Pvt Ltd", "project_name": "TechVision Corporate Website", "amount": 25000, "gst_percent": 18, "total_amount": 29500, "due_date": "2025-02-28", "status": "paid", "paid_date": "2025-02-20", "notes": "First milestone payment" },
        { "id": "2", "invoice_number": "INV-2025-002", "client_id": "2", "client_name": "ShopKart India", "project_name": "ShopKart Ecommerce Platform", "amount": 45000, "gst_percent": 18, "total_amount": 53100, "due_date": "2025-03-15", "status": "pending", "notes": "Second milestone" },
        { "id": "3", "invoice_number": "INV-2025-003", "client_id": "4", "client_name": "FashionHub", "project_name": "FashionHub Store Redesign", "amount": 20000, "gst_percent": 18, "total_amount": 23600, "due_date": "2025-02-01", "status": "overdue", "notes": "Design phase completion" },
        { "id": "4", "invoice_number": "INV-2025-004", "client_id": "1", "client_name": "TechVision Pvt Ltd", "project_name": "Monthly Maintenance — Feb", "amount": 5000, "gst_percent": 18, "total_amount": 5900, "due_date": "2025-04-01", "status": "recurring", "notes": "Monthly maintenance plan" },
        { "id": "5", "invoice_number": "INV-2025-005", "client_id": "5", "client_name": "Digital Edge", "project_name": "Digital Edge Business Site", "amount": 15000, "gst_percent": 18, "total_amount": 17700, "due_date": "2025-03-30", "status": "pending", "notes": "Initial payment" }
    ])
}

fn services() -> Value {
    json!([
        { "id": "1", "name": "Business Website", "icon": "🏢", "pricing": 25000, "active_clients": 12, "revenue_generated": 300000, "avg_delivery_days": 30, "description": "Professional business websites with modern design" },
        { "id": "2", "name": "Ecommerce Website", "icon": "🛒", "pricing": 55000, "active_clients": 8, "revenue_generated": 440000, "avg_delivery_days": 45, "description": "Full-featured online stores with payment gateway" },
        { "id": "3", "name": "Landing Page", "icon": "📄", "pricing": 12000, "active_clients": 5, "revenue_generated": 60000, "avg_delivery_days": 7, "description": "High-converting landing pages for campaigns" },
        { "id": "4", "name": "Website Redesign", "icon": "🎨", "pricing": 18000, "active_clients": 4, "revenue_generated": 72000, "avg_delivery_days": 21, "description": "Modernize existing websites with fresh design" },
        { "id": "5", "name": "Maintenance Plan", "icon": "🛠️", "pricing": 5000, "active_clients": 15, "revenue_generated": 75000, "avg_delivery_days": 0, "description": "Monthly website maintenance and updates" },
        { "id": "6", "name": "SEO Add-on", "icon": "📈", "pricing": 8000, "active_clients": 10, "revenue_generated": 80000, "avg_delivery_days": 0, "description": "Search engine optimization and ranking improvement" },
        { "id": "7", "name": "Hosting Setup", "icon": "☁️", "pricing": 3500, "active_clients": 20, "revenue_generated": 70000, "avg_delivery_days": 2, "description": "Server setup, DNS config, and SSL installation" }
    ])
}

fn team_members() -> Value {
    json!([
        { "id": "1", "name": "Arjun Kapoor", "email": "arjun@nexlance.com", "role": "Developer", "can_edit_tasks": true, "can_see_revenue": false, "can_create_invoices": false, "can_upload_files": true },
        { "id": "2", "name": "Priya Gupta", "email": "priya@nexlance.com", "role": "Designer", "can_edit_tasks": true, "can_see_revenue": false, "can_create_invoices": false, "can_upload_files": true },
        { "id": "3", "name": "Rohit Sharma", "email": "rohit@nexlance.com", "role": "Project Manager", "can_edit_tasks": true, "can_see_revenue": true, "can_create_invoices": true, "can_upload_files": true },
        { "id": "4", "name": "Admin User", "email": "admin@nexlance.com", "role": "Admin", "can_edit_tasks": true, "can_see_revenue": true, "can_create_invoices": true, "can_upload_files": true }
    ])
}
