use serde_json::json;

use crate::catalog::{Catalog, EndpointDemo, NavItem};

pub fn catalog() -> Catalog {
    Catalog {
        nav: NavItem {
            path: "/crud-operations",
            label: "CRUD Operations",
            desc: "Add, Update, Remove, Attach, SaveChanges",
        },
        title: "CRUD Operations",
        subtitle: "Demonstrates Add, AddRange, Update, Remove, and Attach with EntityState. Changes are persisted to the database.",
        demos: vec![
            EndpointDemo::post(
                "Add (Single Entity)",
                "/api/crudoperations/add",
                "Insert a new product using DbSet.Add and SaveChangesAsync",
                r#"// POST /api/crudoperations/add
var product = new Product
{
    ProductName = dto.ProductName,
    UnitPrice = dto.UnitPrice,
    Discontinued = false
};

_context.Products.Add(product);
await _context.SaveChangesAsync();

// After SaveChanges, product.ProductId is set
// by the database (identity column)."#,
            )
            .with_body(json!({ "productName": "Demo Product", "unitPrice": 15.99 })),
            EndpointDemo::post(
                "AddRange (Batch Insert)",
                "/api/crudoperations/addrange",
                "Insert multiple products at once using AddRange",
                r#"// POST /api/crudoperations/addrange
var products = new List<Product>
{
    new Product { ProductName = "Batch Item 1", UnitPrice = 10.00m },
    new Product { ProductName = "Batch Item 2", UnitPrice = 20.00m },
    new Product { ProductName = "Batch Item 3", UnitPrice = 30.00m }
};

_context.Products.AddRange(products);
await _context.SaveChangesAsync();

// AddRange is more efficient than calling Add in a loop."#,
            ),
            EndpointDemo::put(
                "Update (Tracked Entity)",
                "/api/crudoperations/update/1",
                "Fetch an entity, modify it, and let the change tracker detect the update",
                r#"// PUT /api/crudoperations/update/{id}
var product = await _context.Products.FindAsync(id);
if (product == null) return NotFound();

product.ProductName = product.ProductName + " (Updated)";
product.UnitPrice = (product.UnitPrice ?? 0) + 1.00m;

// No need to call Update() - the change tracker
// detects modifications automatically.
await _context.SaveChangesAsync();"#,
            ),
            EndpointDemo::put(
                "DbSet.Update (Disconnected)",
                "/api/crudoperations/update-method",
                "Attach a disconnected entity and mark it as Modified using DbSet.Update()",
                r#"// PUT /api/crudoperations/update-method
var product = await _context.Products
    .AsNoTracking()
    .FirstAsync();
product.ProductName = product.ProductName + " (Updated)";

_context.Products.Update(product);
await _context.SaveChangesAsync();

// Update() marks ALL properties as Modified.
// Use this for disconnected scenarios (e.g., API payloads)."#,
            ),
            EndpointDemo::delete(
                "Remove",
                "/api/crudoperations/remove/999",
                "Delete a product by ID (uses a high ID to avoid removing real data)",
                r#"// DELETE /api/crudoperations/remove/{id}
var product = await _context.Products.FindAsync(id);
if (product == null) return NotFound();

_context.Products.Remove(product);
await _context.SaveChangesAsync();

// Remove marks the entity as Deleted.
// SaveChanges issues a DELETE SQL statement."#,
            ),
            EndpointDemo::post(
                "Attach + EntityState",
                "/api/crudoperations/attach",
                "Attach a disconnected entity and explicitly set its EntityState",
                r#"// POST /api/crudoperations/attach
var product = new Product { ProductId = 1, ProductName = "Chai" };

freshContext.Products.Attach(product);
var stateAfterAttach = freshContext.Entry(product).State;   // Unchanged

product.UnitPrice = 99.99m;
var stateAfterModify = freshContext.Entry(product).State;   // Modified

// Attach starts tracking as Unchanged.
// Changing a property flips the entry to Modified."#,
            ),
            EndpointDemo::get(
                "List Products (Verify)",
                "/api/crudoperations/products",
                "List all products to verify CRUD operations",
                r#"// GET /api/crudoperations/products
var products = await _context.Products
    .OrderByDescending(p => p.ProductId)
    .Take(20)
    .Select(p => new {
        p.ProductId,
        p.ProductName,
        p.UnitPrice,
        p.Discontinued
    })
    .ToListAsync();"#,
            ),
        ],
    }
}
