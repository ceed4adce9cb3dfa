use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/change-tracker",
            label: "Change Tracker",
            desc: "Entries, EntityState, OriginalValues",
        },
        title: "Change Tracker",
        subtitle: "Demonstrates ChangeTracker.Entries, all five EntityState values, OriginalValues/CurrentValues, and DetectChanges.",
        demos: vec![
            EndpointDemo::get(
                "ChangeTracker.Entries()",
                "/api/changetracker/entries",
                "Loads entities, modifies one, adds a new one, then inspects ChangeTracker.Entries() to see each tracked entity and its state.",
                r#"var products = await _context.Products.Take(3).ToListAsync();

// Modify the first product - state becomes Modified
products[0].UnitPrice += 1;

// Add a new product - state becomes Added
_context.Products.Add(new Product { ProductName = "New Demo Product" });

var entries = _context.ChangeTracker.Entries()
    .Select(e => new {
        EntityType = e.Entity.GetType().Name,
        e.State,
        StateName = e.State.ToString()
    })
    .ToList();"#,
            ),
            EndpointDemo::get(
                "All EntityState Values",
                "/api/changetracker/entitystate",
                "Demonstrates all five EntityState values: Unchanged, Modified, Added, Deleted, and Detached.",
                r#"var unchanged = await _context.Products.FirstAsync();

var modified = await _context.Products.Skip(1).FirstAsync();
modified.UnitPrice += 1;

var added = new Product { ProductName = "Added Product" };
_context.Products.Add(added);

var deleted = await _context.Products.Skip(2).FirstAsync();
_context.Products.Remove(deleted);

var detached = new Product { ProductName = "Detached Product" };

var states = new[]
{
    new { Name = unchanged.ProductName, State = _context.Entry(unchanged).State.ToString() },
    new { Name = modified.ProductName,  State = _context.Entry(modified).State.ToString() },
    new { Name = added.ProductName,     State = _context.Entry(added).State.ToString() },
    new { Name = deleted.ProductName,   State = _context.Entry(deleted).State.ToString() },
    new { Name = detached.ProductName,  State = _context.Entry(detached).State.ToString() }
};"#,
            ),
            EndpointDemo::get(
                "OriginalValues / CurrentValues",
                "/api/changetracker/original-current",
                "Shows how to read OriginalValues vs CurrentValues and check which properties are marked as modified.",
                r#"var product = await _context.Products.FirstAsync();
var originalPrice = product.UnitPrice;

product.UnitPrice += 10;

var entry = _context.Entry(product);

var propertyStates = entry.Properties.Select(p => new {
    Property = p.Metadata.Name,
    OriginalValue = p.OriginalValue?.ToString(),
    CurrentValue = p.CurrentValue?.ToString(),
    p.IsModified
}).ToList();"#,
            ),
            EndpointDemo::get(
                "DetectChanges / HasChanges",
                "/api/changetracker/detect-changes",
                "Calls ChangeTracker.DetectChanges() explicitly and checks HasChanges() before and after modifications.",
                r#"var product = await _context.Products.FirstAsync();
var hasChangesBefore = _context.ChangeTracker.HasChanges();

product.UnitPrice += 1;

// DetectChanges scans all tracked entities for modifications
_context.ChangeTracker.DetectChanges();
var hasChangesAfter = _context.ChangeTracker.HasChanges();

var trackedEntities = _context.ChangeTracker.Entries()
    .Select(e => new {
        Entity = e.Entity.GetType().Name,
        State = e.State.ToString()
    })
    .ToList();"#,
            ),
        ],
    }
}
