use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/bulk-operations",
            label: "Bulk Operations",
            desc: "ExecuteUpdate, ExecuteDelete",
        },
        title: "Bulk Operations (EF Core 7+)",
        subtitle: "Demonstrates ExecuteUpdate and ExecuteDelete - set-based operations that bypass the change tracker.",
        demos: vec![
            EndpointDemo::post(
                "ExecuteUpdate (Bulk Update)",
                "/api/bulkoperations/executeupdate",
                "Update all matching rows in a single SQL UPDATE - bypasses the change tracker entirely",
                r#"// POST /api/bulkoperations/executeupdate
var rowsAffected = await _context.Products
    .Where(p => p.CategoryId == 1)
    .ExecuteUpdateAsync(setters => setters
        .SetProperty(p => p.UnitPrice, p => p.UnitPrice * 1.10m)
    );

// Generates:
// UPDATE Products SET UnitPrice = UnitPrice * 1.10
// WHERE CategoryID = 1
//
// No entities are loaded into memory."#,
            ),
            EndpointDemo::post(
                "ExecuteDelete (Bulk Delete)",
                "/api/bulkoperations/executedelete",
                "Delete all matching rows in a single SQL DELETE - no entity loading needed",
                r#"// POST /api/bulkoperations/executedelete
var rowsAffected = await _context.Products
    .Where(p => p.Discontinued && p.UnitsInStock == 0)
    .ExecuteDeleteAsync();

// Generates:
// DELETE FROM Products
// WHERE Discontinued = 1 AND UnitsInStock = 0"#,
            ),
            EndpointDemo::post(
                "ExecuteUpdate Multiple Properties",
                "/api/bulkoperations/executeupdate-multiple",
                "Update multiple columns in a single bulk operation using chained SetProperty calls",
                r#"// POST /api/bulkoperations/executeupdate-multiple
var rowsAffected = await _context.Products
    .Where(p => p.CategoryId == 2)
    .ExecuteUpdateAsync(setters => setters
        .SetProperty(p => p.UnitPrice, p => p.UnitPrice * 1.05m)
        .SetProperty(p => p.Discontinued, false)
        .SetProperty(p => p.ReorderLevel, (short)10)
    );

// All three columns updated in a single UPDATE statement."#,
            ),
        ],
    }
}
